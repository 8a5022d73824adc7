//! Distance metrics and sort comparators for colors.
//!
//! A color metric maps a pair of colors to a non-negative number that is zero
//! for identical colors and symmetric in its arguments. [`Metric`] enumerates
//! the built-in metrics, whereas [`ColorMetric`] abstracts over metrics, so
//! that [`ClosestColorMatcher`](crate::ClosestColorMatcher) also accepts
//! closures.
//!
//! The comparators in this module impose a total order on colors. They first
//! compare the named quantity, then hue, and finally the packed
//! [`rgba_hex`](crate::Color::rgba_hex) value.

use std::cmp::Ordering;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{euclidean, hue_arc, luminance, perceived_brightness, rgb_to_hsb};
use crate::{Color, Float};

/// The hue in degrees considered warmest.
pub const WARMEST_HUE: Float = 30.0;

/// Compute the colorfulness of the HSB color, i.e., the product of saturation
/// and brightness.
#[inline]
pub(crate) fn colorfulness(hsb: &[Float; 3]) -> Float {
    hsb[1] * hsb[2]
}

/// Compute the warmth of the HSB color.
///
/// The hue's warmth is one for orange at 30º and falls off linearly with the
/// length of the arc on the hue circle, reaching zero for azure at 210º.
/// Saturation then pulls the result toward the neutral 0.5.
#[inline]
pub(crate) fn warmth(hsb: &[Float; 3]) -> Float {
    let [hue, saturation, _] = *hsb;
    let hue_warmth = 1.0 - hue_arc(hue, WARMEST_HUE) / 180.0;
    (hue_warmth - 0.5).mul_add(saturation, 0.5)
}

// ====================================================================================================================

/// The built-in color metrics.
///
/// All metrics operate on the color channels after clamping to unit range.
///
/// ```
/// # use prettyhue::{Color, Metric};
/// let red = Color::from_rgb_hex(0xff0000);
/// let black = Color::from_rgb_hex(0x000000);
/// assert_eq!(Metric::Rgb.distance(&red, &black), 1.0);
/// assert_eq!(Metric::Rgba.distance(&red, &red), 0.0);
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyhue.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// The Euclidean distance between red, green, and blue.
    #[default]
    Rgb,
    /// The Euclidean distance between red, green, blue, and alpha.
    Rgba,
    /// The absolute difference in luminance.
    Luminance,
    /// The absolute difference in HSP's perceived brightness.
    PerceivedBrightness,
    /// The absolute difference in colorfulness.
    Colorfulness,
    /// The absolute difference in warmth.
    Warmth,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Metric {
    /// Compute the distance between the two colors.
    pub fn distance(&self, color1: &Color, color2: &Color) -> Float {
        let channels1 = color1.to_array();
        let channels2 = color2.to_array();
        let [r1, g1, b1, _] = channels1;
        let [r2, g2, b2, _] = channels2;
        let (rgb1, rgb2) = ([r1, g1, b1], [r2, g2, b2]);

        match *self {
            Self::Rgb => euclidean::<3>(&channels1, &channels2),
            Self::Rgba => euclidean::<4>(&channels1, &channels2),
            Self::Luminance => (luminance(&rgb1) - luminance(&rgb2)).abs(),
            Self::PerceivedBrightness => {
                (perceived_brightness(&rgb1) - perceived_brightness(&rgb2)).abs()
            }
            Self::Colorfulness => {
                (colorfulness(&rgb_to_hsb(&rgb1)) - colorfulness(&rgb_to_hsb(&rgb2))).abs()
            }
            Self::Warmth => (warmth(&rgb_to_hsb(&rgb1)) - warmth(&rgb_to_hsb(&rgb2))).abs(),
        }
    }

    /// Get a human-readable name for this metric.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Luminance => "luminance",
            Self::PerceivedBrightness => "perceived brightness",
            Self::Colorfulness => "colorfulness",
            Self::Warmth => "warmth",
        }
    }
}

/// A color metric.
///
/// Besides [`Metric`], every closure or function taking two color references
/// and returning a float implements this trait.
///
/// ```
/// # use prettyhue::{Color, ColorMetric};
/// let red_only = |c1: &Color, c2: &Color| (c1.red() - c2.red()).abs();
/// let distance = red_only.distance(
///     &Color::from_rgb_hex(0xff8000),
///     &Color::from_rgb_hex(0x008000),
/// );
/// assert_eq!(distance, 1.0);
/// ```
pub trait ColorMetric {
    /// Compute the distance between the two colors.
    fn distance(&self, color1: &Color, color2: &Color) -> Float;
}

impl ColorMetric for Metric {
    #[inline]
    fn distance(&self, color1: &Color, color2: &Color) -> Float {
        Metric::distance(self, color1, color2)
    }
}

impl<F> ColorMetric for F
where
    F: Fn(&Color, &Color) -> Float,
{
    #[inline]
    fn distance(&self, color1: &Color, color2: &Color) -> Float {
        self(color1, color2)
    }
}

// ====================================================================================================================

fn compare_by<K>(color1: &Color, color2: &Color, key: K) -> Ordering
where
    K: Fn(&Color) -> Float,
{
    let (key1, key2) = (key(color1), key(color2));
    debug_assert!(
        !key1.is_nan() && !key2.is_nan(),
        "sort key should be a number for {:?} and {:?}",
        color1,
        color2
    );

    key1.total_cmp(&key2)
        .then_with(|| color1.hue().total_cmp(&color2.hue()))
        .then_with(|| color1.rgba_hex().cmp(&color2.rgba_hex()))
}

/// Compare the two colors by warmth, from coolest to warmest.
///
/// ```
/// # use prettyhue::{Color, metric::compare_warmth};
/// # use std::cmp::Ordering;
/// let orange_red = Color::from_rgb_hex(0xff4500);
/// let dodger_blue = Color::from_rgb_hex(0x1e90ff);
/// assert_eq!(compare_warmth(&orange_red, &dodger_blue), Ordering::Greater);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #ff4500;"></div>
/// <div style="background-color: #1e90ff;"></div>
/// </div>
pub fn compare_warmth(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::warmth)
}

/// Compare the two colors by colorfulness.
pub fn compare_colorfulness(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::colorfulness)
}

/// Compare the two colors by hue.
pub fn compare_hue(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::hue)
}

/// Compare the two colors by HSB saturation.
pub fn compare_saturation(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::saturation)
}

/// Compare the two colors by HSB brightness.
pub fn compare_brightness(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::brightness)
}

/// Compare the two colors by luminance.
pub fn compare_luminance(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::luminance)
}

/// Compare the two colors by HSP's perceived brightness.
pub fn compare_perceived_brightness(color1: &Color, color2: &Color) -> Ordering {
    compare_by(color1, color2, Color::perceived_brightness)
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{
        compare_brightness, compare_colorfulness, compare_hue, compare_luminance,
        compare_saturation, compare_warmth, ColorMetric, Metric,
    };
    use crate::random::random_color_with;
    use crate::{assert_within, Color, Float};

    const METRICS: [Metric; 6] = [
        Metric::Rgb,
        Metric::Rgba,
        Metric::Luminance,
        Metric::PerceivedBrightness,
        Metric::Colorfulness,
        Metric::Warmth,
    ];

    #[test]
    fn test_metric_laws() {
        let mut rng = StdRng::seed_from_u64(665);
        for _ in 0..100 {
            let c1 = random_color_with(&mut rng);
            let c2 = random_color_with(&mut rng);
            for metric in METRICS {
                assert_eq!(metric.distance(&c1, &c1), 0.0, "{} not zero", metric.name());
                let d12 = metric.distance(&c1, &c2);
                assert!(d12 >= 0.0, "{} negative", metric.name());
                assert_within!(d12, metric.distance(&c2, &c1), 1e-12);
            }
        }
    }

    #[test]
    fn test_metric_values() {
        let white = Color::rgb(1.0, 1.0, 1.0);
        let black = Color::rgb(0.0, 0.0, 0.0);
        let clear = Color::new(0.0, 0.0, 0.0, 0.0);

        assert_within!(Metric::Rgb.distance(&white, &black), (3.0 as Float).sqrt(), 1e-12);
        assert_eq!(Metric::Rgb.distance(&black, &clear), 0.0);
        assert_eq!(Metric::Rgba.distance(&black, &clear), 1.0);
        assert_within!(Metric::Luminance.distance(&white, &black), 1.0, 1e-12);

        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(Metric::Colorfulness.distance(&red, &black), 1.0);
        assert_eq!(Metric::Warmth.distance(&white, &black), 0.0);
    }

    #[test]
    fn test_closure_metric() {
        let alpha_only = |c1: &Color, c2: &Color| (c1.alpha() - c2.alpha()).abs();
        let opaque = Color::rgb(0.2, 0.4, 0.6);
        let translucent = Color::new(0.2, 0.4, 0.6, 0.25);
        assert_eq!(alpha_only.distance(&opaque, &translucent), 0.75);
        assert_eq!(ColorMetric::distance(&Metric::Rgb, &opaque, &translucent), 0.0);
    }

    #[test]
    fn test_warmth() {
        let orange = Color::from_hsb(30.0, 1.0, 1.0, 1.0);
        let azure = Color::from_hsb(210.0, 1.0, 1.0, 1.0);
        assert_within!(orange.warmth(), 1.0, 1e-9);
        assert_within!(azure.warmth(), 0.0, 1e-9);
        assert_eq!(Color::gray(0.5, 1.0).warmth(), 0.5);

        let orange_red = Color::from_rgb_hex(0xff4500);
        let dodger_blue = Color::from_rgb_hex(0x1e90ff);
        assert!(orange_red.warmth() > dodger_blue.warmth(), "orange red is warmer");
        assert_eq!(compare_warmth(&dodger_blue, &orange_red), Ordering::Less);
    }

    #[test]
    fn test_comparators() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let dark_red = Color::rgb(0.5, 0.0, 0.0);
        let green = Color::rgb(0.0, 1.0, 0.0);
        let gray = Color::gray(0.5, 1.0);

        assert_eq!(compare_hue(&red, &green), Ordering::Less);
        assert_eq!(compare_saturation(&gray, &red), Ordering::Less);
        assert_eq!(compare_brightness(&dark_red, &red), Ordering::Less);
        assert_eq!(compare_colorfulness(&red, &dark_red), Ordering::Greater);
        assert_eq!(compare_luminance(&red, &green), Ordering::Less);

        // Equal hue and saturation, so the packed value breaks the tie.
        assert_eq!(compare_hue(&dark_red, &red), Ordering::Less);
        assert_eq!(compare_saturation(&dark_red, &red), Ordering::Less);
        assert_eq!(compare_saturation(&red, &red), Ordering::Equal);

        let mut colors = vec![red, gray, green, dark_red];
        colors.sort_by(compare_brightness);
        assert_eq!(colors, vec![dark_red, gray, red, green]);
    }
}
