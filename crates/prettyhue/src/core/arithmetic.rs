use super::unit4;
use crate::Float;

/// Apply the binary operation to each channel pair and clamp the result.
#[inline]
fn zip_with<F>(channels1: &[Float; 4], channels2: &[Float; 4], mut op: F) -> [Float; 4]
where
    F: FnMut(Float, Float) -> Float,
{
    let [r1, g1, b1, a1] = *channels1;
    let [r2, g2, b2, a2] = *channels2;
    unit4(&[op(r1, r2), op(g1, g2), op(b1, b2), op(a1, a2)])
}

/// Add the channels and clamp the result.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn add(channels1: &[Float; 4], channels2: &[Float; 4]) -> [Float; 4] {
    zip_with(channels1, channels2, |c1, c2| c1 + c2)
}

/// Multiply the channels and clamp the result.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn multiply(channels1: &[Float; 4], channels2: &[Float; 4]) -> [Float; 4] {
    zip_with(channels1, channels2, |c1, c2| c1 * c2)
}

/// Move every channel up to the target channel if the target is lighter.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn lighten_to(channels: &[Float; 4], target: &[Float; 4]) -> [Float; 4] {
    zip_with(channels, target, Float::max)
}

/// Move every channel down to the target channel if the target is darker.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn darken_to(channels: &[Float; 4], target: &[Float; 4]) -> [Float; 4] {
    zip_with(channels, target, Float::min)
}

/// Move every channel a fraction of the way toward the target channel, but
/// only if the target is lighter.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn lighten_toward(
    channels: &[Float; 4],
    target: &[Float; 4],
    amount: Float,
) -> [Float; 4] {
    zip_with(channels, target, |c, t| {
        if t > c {
            amount.mul_add(t - c, c)
        } else {
            c
        }
    })
}

/// Move every channel a fraction of the way toward the target channel, but
/// only if the target is darker.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn darken_toward(
    channels: &[Float; 4],
    target: &[Float; 4],
    amount: Float,
) -> [Float; 4] {
    zip_with(channels, target, |c, t| {
        if t < c {
            amount.mul_add(t - c, c)
        } else {
            c
        }
    })
}

#[cfg(test)]
mod test {
    use super::{add, darken_to, darken_toward, lighten_to, lighten_toward, multiply};

    #[test]
    fn test_add_multiply() {
        let gray = [0.5, 0.5, 0.5, 1.0];
        assert_eq!(add(&gray, &[0.25, 0.75, 0.0, 0.0]), [0.75, 1.0, 0.5, 1.0]);
        assert_eq!(add(&gray, &[-1.0, 0.0, 0.0, 0.0]), [0.0, 0.5, 0.5, 1.0]);
        assert_eq!(multiply(&gray, &[1.0, 1.0, 1.0, 1.0]), gray);
        assert_eq!(multiply(&gray, &[0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(multiply(&gray, &[4.0, 1.0, 1.0, 1.0]), [1.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_lighten_darken() {
        let color = [0.2, 0.6, 0.4, 1.0];
        let target = [0.4, 0.4, 0.4, 1.0];

        assert_eq!(lighten_to(&color, &target), [0.4, 0.6, 0.4, 1.0]);
        assert_eq!(darken_to(&color, &target), [0.2, 0.4, 0.4, 1.0]);

        let [r, g, b, a] = lighten_toward(&color, &target, 0.5);
        assert!((r - 0.3).abs() < 1e-12, "red moves halfway up");
        assert_eq!([g, b, a], [0.6, 0.4, 1.0]);

        let [r, g, b, a] = darken_toward(&color, &target, 0.5);
        assert!((g - 0.5).abs() < 1e-12, "green moves halfway down");
        assert_eq!([r, b, a], [0.2, 0.4, 1.0]);
    }
}
