//! Random colors.
//!
//! The functions without `_with` suffix draw from the thread-local generator,
//! whereas the others accept any [`Rng`], which makes for reproducible colors
//! with a seeded generator. All random colors are opaque.
//!
//! ```
//! # use prettyhue::random::{random_dark_color, random_light_color};
//! let dark = random_dark_color(0.4);
//! assert!(dark.brightness() <= 0.4);
//!
//! let light = random_light_color(0.6);
//! assert!(light.brightness() >= 0.6);
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use rand::Rng;

use crate::core::unit;
use crate::{Color, Float};

/// Create a random opaque color with the given generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.random(), rng.random(), rng.random(), 1.0)
}

/// Create a random dark color with the given generator.
///
/// The factor, clamped to unit range, caps the HSB brightness.
pub fn random_dark_color_with<R: Rng + ?Sized>(rng: &mut R, factor: Float) -> Color {
    let factor = unit(factor);
    let brightness: Float = rng.random();
    Color::from_hsb(
        rng.random::<Float>() * 360.0,
        rng.random(),
        brightness * factor,
        1.0,
    )
}

/// Create a random light color with the given generator.
///
/// The factor, clamped to unit range, is the HSB brightness's lower bound.
pub fn random_light_color_with<R: Rng + ?Sized>(rng: &mut R, factor: Float) -> Color {
    let factor = unit(factor);
    let brightness: Float = rng.random();
    Color::from_hsb(
        rng.random::<Float>() * 360.0,
        rng.random(),
        (1.0 - factor).mul_add(brightness, factor),
        1.0,
    )
}

/// Create a random opaque color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn random_color() -> Color {
    random_color_with(&mut rand::rng())
}

/// Create a random dark color whose HSB brightness is at most the factor.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn random_dark_color(factor: Float) -> Color {
    random_dark_color_with(&mut rand::rng(), factor)
}

/// Create a random light color whose HSB brightness is at least the factor.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn random_light_color(factor: Float) -> Color {
    random_light_color_with(&mut rand::rng(), factor)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{random_color_with, random_dark_color_with, random_light_color_with};

    #[test]
    fn test_random_colors() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let color = random_color_with(&mut rng);
            assert_eq!(color.alpha(), 1.0);

            let dark = random_dark_color_with(&mut rng, 0.3);
            assert!(dark.brightness() <= 0.3 + 1e-9, "{:?} is too bright", dark);

            let light = random_light_color_with(&mut rng, 0.7);
            assert!(light.brightness() >= 0.7 - 1e-9, "{:?} is too dark", light);
        }

        // Out-of-range factors clamp.
        let black = random_dark_color_with(&mut rng, -2.0);
        assert_eq!(black.brightness(), 0.0);
        let white = random_light_color_with(&mut rng, 3.0);
        assert_eq!(white.brightness(), 1.0);
    }

    #[test]
    fn test_seeded_colors_repeat() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_color_with(&mut rng1), random_color_with(&mut rng2));
        }
    }
}
