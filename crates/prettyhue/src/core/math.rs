use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Clamp the value to unit range `0..=1`.
#[inline]
pub(crate) fn unit(value: Float) -> Float {
    value.clamp(0.0, 1.0)
}

/// Clamp all four channels to unit range.
#[inline]
pub(crate) fn unit4(channels: &[Float; 4]) -> [Float; 4] {
    let [r, g, b, a] = *channels;
    [unit(r), unit(g), unit(b), unit(a)]
}

/// Quantize a channel to a byte.
///
/// The channel is clamped to unit range first. Rounding is half away from
/// zero, which is what [`Float::round`] does.
#[inline]
pub(crate) fn to_byte(value: Float) -> u8 {
    (unit(value) * 255.0).round() as u8
}

/// Normalize the hue to `0..360`.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let h = hue.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Compute the length of the shorter arc between two hues, in degrees.
///
/// The result is in `0..=180`.
#[inline]
pub(crate) fn hue_arc(h1: Float, h2: Float) -> Float {
    let d = (normalize_hue(h1) - normalize_hue(h2)).abs();
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Compute the signed shorter-arc rotation from `from` to `to`, in degrees.
///
/// The result is in `-180..=180`; positive values rotate counter-clockwise,
/// i.e., increase the hue.
#[inline]
pub(crate) fn hue_rotation(from: Float, to: Float) -> Float {
    let d = normalize_hue(to) - normalize_hue(from);
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}
