//! Closest color matching against a registry's dictionaries.

use crate::core::{find_closest, find_n_closest};
use crate::error::NotFoundError;
use crate::{Color, ColorDictionary, ColorMetric, ColorRegistry, Float};

/// A dictionary entry closest to some color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<'r> {
    /// The color's name.
    pub name: &'r str,
    /// The named color.
    pub color: &'r Color,
    /// The distance to the color being matched.
    pub distance: Float,
}

/// A registry entry closest to some color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'r> {
    /// The identifier of the dictionary with the entry.
    pub dictionary: &'r str,
    /// The color's name.
    pub name: &'r str,
    /// The named color.
    pub color: &'r Color,
    /// The distance to the color being matched.
    pub distance: Float,
}

/// A matcher for the closest named colors.
///
/// The matcher combines a [`ColorRegistry`] with a [`ColorMetric`] and scans
/// dictionaries linearly. When several entries are equally close, the entry
/// that comes first in iteration order wins, with dictionaries iterated in
/// registration order.
///
/// ```
/// # use prettyhue::{ClosestColorMatcher, Color, ColorRegistry, Metric};
/// # use prettyhue::error::NotFoundError;
/// let matcher = ClosestColorMatcher::new(ColorRegistry::builtin(), Metric::Rgb);
/// let almost_orange = Color::from_rgb_hex(0xfe8103);
///
/// let crayon = matcher.closest_in(&almost_orange, "Crayons")?;
/// assert_eq!(crayon.name, "Tangerine");
///
/// let found = matcher.closest(&almost_orange);
/// assert_eq!(found.map(|m| (m.dictionary, m.name)), Some(("Crayons", "Tangerine")));
/// # Ok::<(), NotFoundError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #fe8103;"></div>
/// <div style="background-color: #ff8000;"></div>
/// </div>
#[derive(Clone, Debug)]
pub struct ClosestColorMatcher<'r, M: ColorMetric> {
    registry: &'r ColorRegistry,
    metric: M,
}

impl<'r, M: ColorMetric> ClosestColorMatcher<'r, M> {
    /// Create a new matcher for the registry and metric.
    pub fn new(registry: &'r ColorRegistry, metric: M) -> Self {
        Self { registry, metric }
    }

    /// Get the registry.
    pub fn registry(&self) -> &'r ColorRegistry {
        self.registry
    }

    /// Get the metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    fn scan(&self, color: &Color, dictionary: &'r ColorDictionary) -> Option<Entry<'r>> {
        let index = find_closest(color, dictionary.colors(), |c1, c2| {
            self.metric.distance(c1, c2)
        })?;

        let (name, candidate) = dictionary.iter().nth(index)?;
        let distance = self.metric.distance(color, candidate);
        tracing::trace!(%name, distance, "closest color in dictionary");
        Some(Entry {
            name,
            color: candidate,
            distance,
        })
    }

    /// Find the closest color in the dictionary with the given identifier.
    ///
    /// This method fails if the registry has no such dictionary or if the
    /// dictionary is empty.
    pub fn closest_in(&self, color: &Color, dictionary: &str) -> Result<Entry<'r>, NotFoundError> {
        let (dictionary_name, colors) = self.registry.entry(dictionary)?;
        self.scan(color, colors)
            .ok_or_else(|| NotFoundError::color(Some(dictionary_name), &color.to_hex_format()))
    }

    /// Find the closest color in each non-empty dictionary.
    ///
    /// The result is in registration order.
    pub fn closest_per_dictionary(&self, color: &Color) -> Vec<Match<'r>> {
        self.registry
            .iter()
            .filter_map(|(dictionary, colors)| {
                self.scan(color, colors).map(|entry| Match {
                    dictionary,
                    name: entry.name,
                    color: entry.color,
                    distance: entry.distance,
                })
            })
            .collect()
    }

    /// Find the closest color across all dictionaries.
    ///
    /// This method returns `None` only if all dictionaries are empty.
    pub fn closest(&self, color: &Color) -> Option<Match<'r>> {
        let mut best: Option<Match<'r>> = None;
        for candidate in self.closest_per_dictionary(color) {
            if best
                .as_ref()
                .is_none_or(|found| candidate.distance < found.distance)
            {
                best = Some(candidate);
            }
        }

        if let Some(ref found) = best {
            tracing::trace!(
                dictionary = found.dictionary,
                name = found.name,
                distance = found.distance,
                "closest color"
            );
        }
        best
    }

    /// Find the `n` closest colors in the dictionary with the given
    /// identifier, from closest to farthest.
    ///
    /// Equally close entries appear in iteration order.
    pub fn closest_n_in(
        &self,
        color: &Color,
        dictionary: &str,
        n: usize,
    ) -> Result<Vec<Entry<'r>>, NotFoundError> {
        let colors = self.registry.dictionary(dictionary)?;
        let entries: Vec<_> = colors.iter().collect();

        Ok(find_n_closest(color, colors.colors(), n, |c1, c2| {
            self.metric.distance(c1, c2)
        })
        .into_iter()
        .map(|(index, distance)| {
            let (name, color) = entries[index];
            Entry {
                name,
                color,
                distance,
            }
        })
        .collect())
    }
}

#[cfg(test)]
mod test {
    use super::ClosestColorMatcher;
    use crate::error::NotFoundError;
    use crate::{Color, ColorDictionary, ColorRegistry, Metric};

    #[test]
    fn test_own_value_matches() -> Result<(), NotFoundError> {
        let registry = ColorRegistry::builtin();
        let matcher = ClosestColorMatcher::new(registry, Metric::Rgb);

        for (dictionary_name, dictionary) in registry.iter() {
            for (name, color) in dictionary {
                let found = matcher.closest_in(color, dictionary_name)?;
                assert_eq!(found.distance, 0.0, "{} in {}", name, dictionary_name);
                // An earlier entry with the same RGB value, such as Aqua for
                // Cyan or Black for Clear, wins.
                assert_eq!(found.color.rgb_hex(), color.rgb_hex(), "{} in {}", name, dictionary_name);
            }
        }
        Ok(())
    }

    #[test]
    fn test_ties() -> Result<(), NotFoundError> {
        let black = Color::from_rgb_hex(0x000000);
        let white = Color::from_rgb_hex(0xffffff);
        let gray = Color::gray(0.5, 1.0);

        let first: ColorDictionary = [("Dark", black), ("Light", white)].into_iter().collect();
        let second: ColorDictionary = [("Black", black), ("Ink", black)].into_iter().collect();
        let registry = ColorRegistry::new()
            .with_dictionary("First", first)
            .with_dictionary("Second", second)
            .with_dictionary("Empty", ColorDictionary::default());
        let matcher = ClosestColorMatcher::new(&registry, Metric::Rgb);

        // Gray is equidistant from black and white, so the first entry wins.
        assert_eq!(matcher.closest_in(&gray, "first")?.name, "Dark");

        // Black is in both dictionaries, so the first dictionary wins.
        let found = matcher.closest(&black);
        assert_eq!(found.map(|m| (m.dictionary, m.name)), Some(("First", "Dark")));
        assert_eq!(matcher.closest_in(&black, "Second")?.name, "Black");

        let per_dictionary = matcher.closest_per_dictionary(&white);
        assert_eq!(per_dictionary.len(), 2);
        assert_eq!(per_dictionary[0].name, "Light");
        assert_eq!(per_dictionary[1].dictionary, "Second");

        assert!(matcher.closest_in(&gray, "Empty").is_err());
        assert_eq!(
            matcher.closest_in(&gray, "Pantone").err(),
            Some(NotFoundError::dictionary("Pantone"))
        );
        Ok(())
    }

    #[test]
    fn test_closest_n() -> Result<(), NotFoundError> {
        let matcher = ClosestColorMatcher::new(ColorRegistry::builtin(), Metric::Rgb);
        let red = Color::from_rgb_hex(0xff0000);

        let entries = matcher.closest_n_in(&red, "Base", 3)?;
        let names: Vec<_> = entries.iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["Red", "Maroon", "Purple"]);
        assert_eq!(entries[0].distance, 0.0);
        assert!(entries[1].distance <= entries[2].distance, "sorted by distance");

        assert_eq!(matcher.closest_n_in(&red, "Base", 100)?.len(), 16);
        Ok(())
    }

    #[test]
    fn test_closure_metric() -> Result<(), NotFoundError> {
        let by_luminance = |c1: &Color, c2: &Color| (c1.luminance() - c2.luminance()).abs();
        let matcher = ClosestColorMatcher::new(ColorRegistry::builtin(), by_luminance);

        let found = matcher.closest_in(&Color::gray(0.99, 1.0), "Base")?;
        assert_eq!(found.name, "White");
        Ok(())
    }
}
