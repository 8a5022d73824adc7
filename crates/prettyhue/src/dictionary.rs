use std::collections::HashMap;

use crate::Color;

/// Normalize a name for case-insensitive lookup.
#[inline]
pub(crate) fn to_key(name: &str) -> String {
    name.to_lowercase()
}

/// An iterator over a dictionary's entries.
pub type Entries<'a> = std::iter::Map<std::slice::Iter<'a, (String, Color)>, AsEntry>;

type AsEntry = fn(&(String, Color)) -> (&str, &Color);

fn as_entry(entry: &(String, Color)) -> (&str, &Color) {
    (entry.0.as_str(), &entry.1)
}

/// A named-color dictionary.
///
/// A dictionary is an ordered list of named colors. It preserves the order in
/// which colors were added and looks up names without regard to case, using
/// Unicode lowercase mappings.
/// If the same name, again without regard to case, is added more than once,
/// the first definition wins.
///
/// Dictionaries are immutable once built, either with a
/// [`ColorDictionaryBuilder`] or by collecting an iterator over name, color
/// pairs.
///
/// ```
/// # use prettyhue::{Color, ColorDictionary};
/// let dictionary: ColorDictionary = [
///     ("Ink", Color::from_rgb_hex(0x1b1b1b)),
///     ("Paper", Color::from_rgb_hex(0xf5f1e6)),
///     ("INK", Color::from_rgb_hex(0x000000)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(dictionary.len(), 2);
/// assert_eq!(dictionary.get("ink"), Some(&Color::from_rgb_hex(0x1b1b1b)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColorDictionary {
    entries: Vec<(String, Color)>,
    index: HashMap<String, usize>,
}

impl ColorDictionary {
    /// Create a new builder for a color dictionary.
    pub fn builder() -> ColorDictionaryBuilder {
        ColorDictionaryBuilder::default()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determine whether this dictionary has a color with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&to_key(name))
    }

    /// Look up the color with the given name.
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.index
            .get(&to_key(name))
            .map(|&index| &self.entries[index].1)
    }

    /// Look up the entry with the given name, returning the name as defined.
    pub fn entry(&self, name: &str) -> Option<(&str, &Color)> {
        self.index
            .get(&to_key(name))
            .map(|&index| as_entry(&self.entries[index]))
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> Entries<'_> {
        let as_entry: AsEntry = as_entry;
        self.entries.iter().map(as_entry)
    }

    /// Iterate over the names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.0.as_str())
    }

    /// Iterate over the colors in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.entries.iter().map(|entry| &entry.1)
    }
}

impl<'a> IntoIterator for &'a ColorDictionary {
    type Item = (&'a str, &'a Color);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Color)> for ColorDictionary {
    fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
        let mut builder = ColorDictionary::builder();
        for (name, color) in iter {
            builder.insert(name, color);
        }
        builder.build()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A builder for color dictionaries.
#[derive(Debug, Default)]
pub struct ColorDictionaryBuilder {
    dictionary: ColorDictionary,
}

impl ColorDictionaryBuilder {
    /// Insert the named color.
    ///
    /// If the dictionary already contains a color with the same name, ignoring
    /// case, this method leaves the dictionary unchanged and returns
    /// `false`.
    pub fn insert<S: Into<String>>(&mut self, name: S, color: Color) -> bool {
        let name = name.into();
        let key = to_key(&name);
        if self.dictionary.index.contains_key(&key) {
            tracing::debug!(%name, "rejecting duplicate color name");
            return false;
        }

        self.dictionary
            .index
            .insert(key, self.dictionary.entries.len());
        self.dictionary.entries.push((name, color));
        true
    }

    /// Insert the named color and return this builder.
    ///
    /// Like [`ColorDictionaryBuilder::insert`], this method ignores
    /// duplicate names.
    #[must_use = "method consumes and returns the builder"]
    pub fn with<S: Into<String>>(mut self, name: S, color: Color) -> Self {
        self.insert(name, color);
        self
    }

    /// Build the dictionary.
    pub fn build(self) -> ColorDictionary {
        self.dictionary
    }
}
