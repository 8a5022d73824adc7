#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two quantities are within the given
/// tolerance of each other.
///
/// # Panics
///
/// This macro panics if the absolute difference between the two quantities
/// exceeds the tolerance.
#[macro_export]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize the four channels for equality testing and hashing.
#[must_use = "function returns new channels and does not mutate original value"]
pub(crate) fn to_eq_channels(channels: &[Float; 4]) -> [Bits; 4] {
    let [r, g, b, a] = *channels;
    [to_eq_bits(r), to_eq_bits(g), to_eq_bits(b), to_eq_bits(a)]
}

/// Replace not-a-number channels with zero.
///
/// Every color passes through this function on construction. As a result,
/// all metrics and comparators only ever see numbers.
#[inline]
pub(crate) const fn normalize(channels: [Float; 4]) -> [Float; 4] {
    const fn fix(c: Float) -> Float {
        if c.is_nan() {
            0.0
        } else {
            c
        }
    }

    let [r, g, b, a] = channels;
    [fix(r), fix(g), fix(b), fix(a)]
}

/// The per-channel tolerance for [`Color::is_equal_to`](crate::Color::is_equal_to).
///
/// Two colors are considered equal if every channel, after clamping to unit
/// range, differs by strictly less than one byte step.
pub const EQUALITY_EPSILON: Float = 1.0 / 255.0;

/// Determine whether the clamped channels differ by less than
/// [`EQUALITY_EPSILON`] each.
pub(crate) fn is_close(channels1: &[Float; 4], channels2: &[Float; 4]) -> bool {
    channels1
        .iter()
        .zip(channels2.iter())
        .all(|(c1, c2)| (c1.clamp(0.0, 1.0) - c2.clamp(0.0, 1.0)).abs() < EQUALITY_EPSILON)
}

#[cfg(test)]
mod test {
    use super::{is_close, normalize, to_eq_channels, EQUALITY_EPSILON};
    use crate::Float;

    #[test]
    fn test_normalize() {
        let [r, g, b, a] = normalize([Float::NAN, 0.5, -0.25, Float::NAN]);
        assert_eq!([r, g, b, a], [0.0, 0.5, -0.25, 0.0]);
    }

    #[test]
    fn test_eq_channels() {
        assert_eq!(
            to_eq_channels(&[0.1 + 0.2, -0.0, 1.0, 1.0]),
            to_eq_channels(&[0.3, 0.0, 1.0, 1.0])
        );
        assert_ne!(
            to_eq_channels(&[0.3, 0.0, 1.0, 1.0]),
            to_eq_channels(&[0.31, 0.0, 1.0, 1.0])
        );
    }

    #[test]
    fn test_is_close() {
        let base = [0.5, 0.5, 0.5, 1.0];
        let half_step = EQUALITY_EPSILON / 2.0;
        assert!(is_close(&base, &[0.5 + half_step, 0.5, 0.5, 1.0]));
        assert!(!is_close(&base, &[0.5 + EQUALITY_EPSILON, 0.5, 0.5, 1.0]));
        assert!(!is_close(&base, &[0.5, 0.5, 0.5, 0.5]), "alpha counts");
        assert!(
            is_close(&[1.0, 0.0, 0.0, 1.0], &[3.0, -1.0, 0.0, 2.0]),
            "channels are clamped first"
        );
    }
}
