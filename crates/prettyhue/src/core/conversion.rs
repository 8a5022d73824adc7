use super::normalize_hue;
use crate::Float;

/// The BT.601 weights for red, green, and blue.
///
/// Luminance, YUV's luma, and HSP's perceived brightness all use the same
/// weights.
pub(crate) const LUMA_WEIGHTS: [Float; 3] = [0.299, 0.587, 0.114];

/// Compute the luminance, i.e., the weighted sum of red, green, and blue.
#[inline]
pub(crate) fn luminance(rgb: &[Float; 3]) -> Float {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let [r, g, b] = *rgb;
    wr.mul_add(r, wg.mul_add(g, wb * b))
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in degrees plus the maximum and minimum channel.
///
/// HSB and HSP share the same hexagonal hue geometry. For achromatic colors,
/// the hue is zero.
fn hue_max_min(rgb: &[Float; 3]) -> (Float, Float, Float) {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= 0.0 {
        return (0.0, max, min);
    }

    let sextant = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (normalize_hue(60.0 * sextant), max, min)
}

/// Convert RGB to HSB.
///
/// The hue is in degrees `0..360`, saturation and brightness are in unit range
/// for in-gamut inputs. If saturation is zero, hue is meaningless and returned
/// as zero.
pub(crate) fn rgb_to_hsb(rgb: &[Float; 3]) -> [Float; 3] {
    let (hue, max, min) = hue_max_min(rgb);
    let saturation = if max <= 0.0 { 0.0 } else { (max - min) / max };
    [hue, saturation, max]
}

/// Convert HSB to RGB.
///
/// The hue may have any magnitude and is reduced modulo 360.
pub(crate) fn hsb_to_rgb(hsb: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, brightness] = *hsb;
    if saturation <= 0.0 {
        return [brightness, brightness, brightness];
    }

    let h = normalize_hue(hue) / 60.0;
    let sextant = h.floor();
    let f = h - sextant;
    let p = brightness * (1.0 - saturation);
    let q = brightness * saturation.mul_add(-f, 1.0);
    let t = brightness * saturation.mul_add(f - 1.0, 1.0);
    let v = brightness;

    match sextant as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to CMYK.
///
/// Black is the complement of the largest channel. For pure black, cyan,
/// magenta, and yellow are zero.
pub(crate) fn rgb_to_cmyk(rgb: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *rgb;
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let scale = 1.0 - k;
    [
        (1.0 - r - k) / scale,
        (1.0 - g - k) / scale,
        (1.0 - b - k) / scale,
        k,
    ]
}

/// Convert CMYK to RGB.
pub(crate) fn cmyk_to_rgb(cmyk: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *cmyk;
    let scale = 1.0 - k;
    [(1.0 - c) * scale, (1.0 - m) * scale, (1.0 - y) * scale]
}

// --------------------------------------------------------------------------------------------------------------------

/// The scale factor for U = U_SCALE × (B - Y).
#[allow(clippy::excessive_precision)]
const U_SCALE: Float = 0.492111;
/// The scale factor for V = V_SCALE × (R - Y).
#[allow(clippy::excessive_precision)]
const V_SCALE: Float = 0.877283;

/// Convert RGB to YUV with BT.601 luma.
pub(crate) fn rgb_to_yuv(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, _, b] = *rgb;
    let y = luminance(rgb);
    [y, U_SCALE * (b - y), V_SCALE * (r - y)]
}

/// Convert YUV to RGB.
///
/// This is the exact algebraic inverse of [`rgb_to_yuv`], which makes the
/// round trip lossless up to floating point error.
pub(crate) fn yuv_to_rgb(yuv: &[Float; 3]) -> [Float; 3] {
    let [y, u, v] = *yuv;
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let r = y + v / V_SCALE;
    let b = y + u / U_SCALE;
    let g = (y - wr * r - wb * b) / wg;
    [r, g, b]
}

// --------------------------------------------------------------------------------------------------------------------
// HSP after Darel Rex Finley's public domain algorithm, http://alienryderflex.com/hsp.html

/// Compute the perceived brightness P.
#[inline]
pub(crate) fn perceived_brightness(rgb: &[Float; 3]) -> Float {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let [r, g, b] = *rgb;
    (wr * r * r + wg * g * g + wb * b * b).sqrt()
}

/// Convert RGB to HSP.
///
/// Hue uses the same geometry as HSB and hence is in degrees. Saturation is
/// `1 - min/max`. Perceived brightness P is the weighted quadratic mean of the
/// channels.
pub(crate) fn rgb_to_hsp(rgb: &[Float; 3]) -> [Float; 3] {
    let (hue, max, min) = hue_max_min(rgb);
    let saturation = if max <= 0.0 { 0.0 } else { 1.0 - min / max };
    [hue, saturation, perceived_brightness(rgb)]
}

/// Convert HSP to RGB.
///
/// Within each sextant of the hue circle, the order of the three channels is
/// fixed. The largest channel is a multiple of the smallest channel by
/// `1/(1 - S)`, the middle one interpolates linearly between the two based on
/// the hue's position within the sextant, and P then determines the absolute
/// magnitude.
pub(crate) fn hsp_to_rgb(hsp: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, brightness] = *hsp;
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let h = normalize_hue(hue) / 60.0;
    let sextant = h.floor() as u8;

    // The position within the sextant, running from the primary to the
    // secondary color for even sextants and the other way for odd sextants.
    let fraction = match sextant {
        0 | 2 | 4 => h - Float::from(sextant),
        _ => Float::from(sextant + 1) - h,
    };

    // Weights for the (largest, middle, smallest) channel in each sextant.
    let (w_max, w_mid, w_min) = match sextant {
        0 => (wr, wg, wb), // R > G > B
        1 => (wg, wr, wb), // G > R > B
        2 => (wg, wb, wr), // G > B > R
        3 => (wb, wg, wr), // B > G > R
        4 => (wb, wr, wg), // B > R > G
        _ => (wr, wb, wg), // R > B > G
    };

    let min_over_max = 1.0 - saturation;
    let (max, mid, min) = if min_over_max > 0.0 {
        let part = fraction.mul_add(min_over_max.recip() - 1.0, 1.0);
        let min = brightness
            / (w_max / min_over_max / min_over_max + w_mid * part * part + w_min).sqrt();
        let max = min / min_over_max;
        (max, fraction.mul_add(max - min, min), min)
    } else {
        let max = (brightness * brightness / (w_max + w_mid * fraction * fraction)).sqrt();
        (max, max * fraction, 0.0)
    };

    match sextant {
        0 => [max, mid, min],
        1 => [mid, max, min],
        2 => [min, max, mid],
        3 => [min, mid, max],
        4 => [mid, min, max],
        _ => [max, min, mid],
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_within;

    const SAMPLES: [[Float; 3]; 10] = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.2, 0.4, 0.6],
        [0.9, 0.1, 0.5],
        [0.3, 0.8, 0.2],
        [0.55, 0.5, 0.95],
        [0.7, 0.2, 0.6],
        [0.12, 0.05, 0.03],
        [1.0, 1.0, 0.0],
    ];

    fn assert_rgb_within(actual: [Float; 3], expected: [Float; 3]) {
        for index in 0..3 {
            assert_within!(actual[index], expected[index], 1e-4);
        }
    }

    #[test]
    fn test_hsb() {
        assert_eq!(rgb_to_hsb(&[1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsb(&[0.0, 1.0, 0.0]), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsb(&[0.0, 0.0, 1.0]), [240.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsb(&[0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_eq!(rgb_to_hsb(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);

        for rgb in SAMPLES {
            assert_rgb_within(hsb_to_rgb(&rgb_to_hsb(&rgb)), rgb);
        }

        // Hue is reduced modulo 360.
        assert_rgb_within(hsb_to_rgb(&[-240.0, 1.0, 1.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk(&[1.0, 0.0, 0.0]), [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(rgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_cmyk(&[1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);

        for rgb in SAMPLES {
            assert_rgb_within(cmyk_to_rgb(&rgb_to_cmyk(&rgb)), rgb);
        }
    }

    #[test]
    fn test_yuv() {
        let [y, u, v] = rgb_to_yuv(&[1.0, 1.0, 1.0]);
        assert_within!(y, 1.0, 1e-12);
        assert_within!(u, 0.0, 1e-12);
        assert_within!(v, 0.0, 1e-12);

        for rgb in SAMPLES {
            assert_rgb_within(yuv_to_rgb(&rgb_to_yuv(&rgb)), rgb);
        }
    }

    #[test]
    fn test_hsp() {
        let [h, s, p] = rgb_to_hsp(&[1.0, 0.0, 0.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 1.0);
        assert_within!(p, (0.299 as Float).sqrt(), 1e-12);

        let [_, s, p] = rgb_to_hsp(&[0.4, 0.4, 0.4]);
        assert_eq!(s, 0.0);
        assert_within!(p, 0.4, 1e-12);

        for rgb in SAMPLES {
            let hsp = rgb_to_hsp(&rgb);
            assert_within!(hsp[0], rgb_to_hsb(&rgb)[0], 1e-9);
            assert_rgb_within(hsp_to_rgb(&hsp), rgb);
        }
    }

    #[test]
    fn test_luminance() {
        assert_within!(luminance(&[1.0, 0.0, 0.0]), 0.299, 1e-12);
        assert_within!(luminance(&[1.0, 1.0, 1.0]), 1.0, 1e-12);
    }
}
