use std::sync::LazyLock;

use super::find_closest;
use crate::Float;

/// The smallest supported color temperature in Kelvin.
pub const MIN_KELVIN: Float = 1_000.0;

/// The largest supported color temperature in Kelvin.
pub const MAX_KELVIN: Float = 40_000.0;

/// The step size of the color temperature lookup table.
const TABLE_STEP: Float = 100.0;

/// Convert the color temperature to RGB.
///
/// This function implements Tanner Helland's curve fit to Mitchell Charity's
/// blackbody data. It produces deep red at 1000K, a warm orange around 2700K,
/// near white at 6500K, and increasingly saturated blues beyond that. The
/// temperature is clamped to `MIN_KELVIN..=MAX_KELVIN`. The result is an
/// approximation and makes no claim to colorimetric accuracy.
#[allow(clippy::excessive_precision)]
pub(crate) fn kelvin_to_rgb(kelvin: Float) -> [Float; 3] {
    let kelvin = if kelvin.is_nan() {
        MIN_KELVIN
    } else {
        kelvin.clamp(MIN_KELVIN, MAX_KELVIN)
    };
    let t = kelvin / 100.0;

    let red = if t <= 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };

    let green = if t <= 66.0 {
        99.4708025861_f64.mul_add(f64::from(t).ln(), -161.1195681661) as Float
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231_f64.mul_add(f64::from(t - 10.0).ln(), -305.0447927307) as Float
    };

    [
        red.clamp(0.0, 255.0) / 255.0,
        green.clamp(0.0, 255.0) / 255.0,
        blue.clamp(0.0, 255.0) / 255.0,
    ]
}

/// The lookup table for color temperatures.
///
/// Each entry pairs a temperature with its RGB approximation. The table is
/// built on first access only. [`LazyLock`] guarantees that initialization
/// happens at most once, even under concurrent first access.
static KELVIN_TABLE: LazyLock<Vec<(Float, [Float; 3])>> = LazyLock::new(|| {
    let count = ((MAX_KELVIN - MIN_KELVIN) / TABLE_STEP) as usize + 1;
    let table: Vec<_> = (0..count)
        .map(|index| {
            let kelvin = (index as Float).mul_add(TABLE_STEP, MIN_KELVIN);
            (kelvin, kelvin_to_rgb(kelvin))
        })
        .collect();

    tracing::debug!(entries = table.len(), "built color temperature table");
    table
});

/// Get the color temperature table.
pub(crate) fn kelvin_table() -> &'static [(Float, [Float; 3])] {
    KELVIN_TABLE.as_slice()
}

/// Approximate the color temperature of the RGB color.
///
/// This function scales the color so that its largest channel is one and then
/// looks up the table entry with the smallest Euclidean distance. If several
/// entries are equidistant, the lowest temperature wins. Since black has no
/// chromaticity, this function returns `None` for it.
pub(crate) fn rgb_to_kelvin(rgb: &[Float; 3]) -> Option<Float> {
    let [r, g, b] = rgb.map(|c| c.clamp(0.0, 1.0));
    let max = r.max(g).max(b);
    if max <= 0.0 {
        return None;
    }

    let origin = [r / max, g / max, b / max];
    let table = kelvin_table();
    find_closest(&origin, table.iter().map(|entry| &entry.1), |c1, c2| {
        let [r1, g1, b1] = *c1;
        let [r2, g2, b2] = *c2;
        let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);
        dr.mul_add(dr, dg.mul_add(dg, db * db))
    })
    .map(|index| table[index].0)
}
