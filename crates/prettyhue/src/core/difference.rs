use crate::Float;

/// Compute the Euclidean distance between the first `N` channels.
#[inline]
pub(crate) fn euclidean<const N: usize>(channels1: &[Float], channels2: &[Float]) -> Float {
    channels1
        .iter()
        .zip(channels2.iter())
        .take(N)
        .fold(0.0, |sum: Float, (c1, c2)| {
            let delta = c1 - c2;
            delta.mul_add(delta, sum)
        })
        .sqrt()
}

/// Find the candidate closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate—or `None` if there are no candidates. Since a candidate
/// only replaces the current best when it is strictly closer, the first of
/// several equidistant candidates wins.
pub(crate) fn find_closest<'c, T, C, F>(
    origin: &T,
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    T: 'c + ?Sized,
    C: IntoIterator<Item = &'c T>,
    F: FnMut(&T, &T) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        debug_assert!(!distance.is_nan(), "distance must not be NaN");
        if distance < min_distance || min_index.is_none() {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

/// Find the `n` candidates closest to the origin.
///
/// This function returns the index positions of the closest candidates
/// ordered by increasing distance. Equidistant candidates retain their
/// relative order.
pub(crate) fn find_n_closest<'c, T, C, F>(
    origin: &T,
    candidates: C,
    n: usize,
    mut compute_distance: F,
) -> Vec<(usize, Float)>
where
    T: 'c + ?Sized,
    C: IntoIterator<Item = &'c T>,
    F: FnMut(&T, &T) -> Float,
{
    let mut distances: Vec<_> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| (index, compute_distance(origin, candidate)))
        .collect();

    // Sorting is stable, which preserves iteration order for ties.
    distances.sort_by(|entry1, entry2| entry1.1.total_cmp(&entry2.1));
    distances.truncate(n);
    distances
}

// --------------------------------------------------------------------------------------------------------------------

/// Interpolate between the channels.
///
/// This function calculates the linear interpolation for the given fraction.
/// It does not limit the fraction to unit range. Values outside that range
/// extrapolate, and the caller is responsible for clamping.
#[must_use = "function returns new channels and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    channels1: &[Float; 4],
    channels2: &[Float; 4],
) -> [Float; 4] {
    let lerp = |c1: Float, c2: Float| fraction.mul_add(c2 - c1, c1);
    [
        lerp(channels1[0], channels2[0]),
        lerp(channels1[1], channels2[1]),
        lerp(channels1[2], channels2[2]),
        lerp(channels1[3], channels2[3]),
    ]
}
