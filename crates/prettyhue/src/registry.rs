//! A registry of named-color dictionaries.

use std::sync::LazyLock;

use crate::builtin::DICTIONARIES;
use crate::dictionary::to_key;
use crate::error::NotFoundError;
use crate::{Color, ColorDictionary};

static BUILTIN: LazyLock<ColorRegistry> = LazyLock::new(|| {
    let mut registry = ColorRegistry::new();
    for (name, table) in DICTIONARIES {
        registry.register(name, table.iter().copied().collect());
    }

    tracing::debug!(
        dictionaries = registry.len(),
        colors = registry.iter().map(|(_, dictionary)| dictionary.len()).sum::<usize>(),
        "initialized built-in color registry"
    );
    registry
});

/// An ordered collection of named-color dictionaries.
///
/// Dictionary identifiers, just like color names, are matched without regard
/// to case. Lookups across all dictionaries proceed in registration
/// order. The [built-in registry](ColorRegistry::builtin) holds the `Base`,
/// `CSS`, `Crayons`, and `System` dictionaries, in that order.
///
/// ```
/// # use prettyhue::{Color, ColorRegistry};
/// # fn main() -> Result<(), prettyhue::error::NotFoundError> {
/// let registry = ColorRegistry::builtin();
/// assert_eq!(
///     registry.dictionary_names().collect::<Vec<_>>(),
///     vec!["Base", "CSS", "Crayons", "System"]
/// );
///
/// let tangerine = registry.color_named("tangerine", "crayons")?;
/// assert_eq!(tangerine.to_hex_format(), "#ff8000");
/// # Ok(())
/// # }
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #ff8000;"></div>
/// </div>
#[derive(Clone, Debug, Default)]
pub struct ColorRegistry {
    dictionaries: Vec<(String, ColorDictionary)>,
}

impl ColorRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry with the built-in dictionaries.
    pub fn builtin() -> &'static ColorRegistry {
        &BUILTIN
    }

    /// Register the dictionary under the given identifier.
    ///
    /// If the registry already has a dictionary with the same identifier,
    /// ignoring case, this method leaves the registry unchanged and
    /// returns `false`.
    pub fn register<S: Into<String>>(&mut self, name: S, dictionary: ColorDictionary) -> bool {
        let name = name.into();
        if self.position(&name).is_some() {
            tracing::debug!(%name, "rejecting duplicate dictionary name");
            return false;
        }

        self.dictionaries.push((name, dictionary));
        true
    }

    /// Register the dictionary and return this registry.
    #[must_use = "method consumes and returns the registry"]
    pub fn with_dictionary<S: Into<String>>(mut self, name: S, dictionary: ColorDictionary) -> Self {
        self.register(name, dictionary);
        self
    }

    /// Get the number of dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    /// Determine whether this registry has no dictionaries.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = to_key(name);
        self.dictionaries
            .iter()
            .position(|entry| to_key(&entry.0) == key)
    }

    /// Iterate over the dictionary identifiers in registration order.
    pub fn dictionary_names(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.iter().map(|entry| entry.0.as_str())
    }

    /// Iterate over identifier, dictionary pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorDictionary)> {
        self.dictionaries
            .iter()
            .map(|entry| (entry.0.as_str(), &entry.1))
    }

    /// Look up the dictionary with the given identifier.
    pub fn dictionary(&self, name: &str) -> Result<&ColorDictionary, NotFoundError> {
        self.entry(name).map(|(_, dictionary)| dictionary)
    }

    /// Look up the dictionary with the given identifier, also returning the
    /// identifier as registered.
    pub(crate) fn entry(&self, name: &str) -> Result<(&str, &ColorDictionary), NotFoundError> {
        self.position(name)
            .map(|index| {
                let entry = &self.dictionaries[index];
                (entry.0.as_str(), &entry.1)
            })
            .ok_or_else(|| NotFoundError::dictionary(name))
    }

    /// Look up the color with the given name in the given dictionary.
    pub fn color_named(&self, name: &str, dictionary: &str) -> Result<Color, NotFoundError> {
        let (dictionary_name, colors) = self.entry(dictionary)?;
        colors
            .get(name)
            .copied()
            .ok_or_else(|| NotFoundError::color(Some(dictionary_name), name))
    }

    /// Look up the color with the given name in the first dictionary that
    /// has such a color.
    ///
    /// ```
    /// # use prettyhue::ColorRegistry;
    /// let registry = ColorRegistry::builtin();
    /// let maraschino = registry.color_with_name("Maraschino");
    /// assert_eq!(maraschino.map(|c| c.rgb_hex()), Ok(0xff0000));
    /// assert!(registry.color_with_name("Mauve").is_err());
    /// ```
    pub fn color_with_name(&self, name: &str) -> Result<Color, NotFoundError> {
        self.dictionaries
            .iter()
            .find_map(|entry| entry.1.get(name))
            .copied()
            .ok_or_else(|| NotFoundError::color(None, name))
    }

    /// Find all colors whose names contain every one of the keys.
    ///
    /// Matching ignores case. This method returns dictionary
    /// identifier, color name pairs in registration and insertion order.
    ///
    /// ```
    /// # use prettyhue::ColorRegistry;
    /// let found = ColorRegistry::builtin().search(&["sea", "green"]);
    /// assert_eq!(found, vec![
    ///     ("CSS", "DarkSeaGreen"),
    ///     ("CSS", "LightSeaGreen"),
    ///     ("CSS", "MediumSeaGreen"),
    ///     ("CSS", "SeaGreen"),
    /// ]);
    /// ```
    pub fn search<S: AsRef<str>>(&self, keys: &[S]) -> Vec<(&str, &str)> {
        let keys: Vec<String> = keys.iter().map(|key| to_key(key.as_ref())).collect();

        let mut found = Vec::new();
        for (dictionary_name, dictionary) in self.iter() {
            for name in dictionary.names() {
                let lowered = to_key(name);
                if keys.iter().all(|key| lowered.contains(key.as_str())) {
                    found.push((dictionary_name, name));
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod test {
    use super::ColorRegistry;
    use crate::error::NotFoundError;
    use crate::{Color, ColorDictionary};

    #[test]
    fn test_builtin() -> Result<(), NotFoundError> {
        let registry = ColorRegistry::builtin();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.dictionary("base")?.len(), 16);
        assert_eq!(registry.dictionary("CSS")?.len(), 148);
        assert_eq!(registry.dictionary("Crayons")?.len(), 48);
        assert_eq!(registry.dictionary("SYSTEM")?.len(), 15);

        assert_eq!(registry.color_named("red", "Base")?, Color::from_rgb_hex(0xff0000));
        assert_eq!(registry.color_named("clear", "system")?.alpha(), 0.0);

        // Base comes first.
        assert_eq!(registry.color_with_name("Teal")?, Color::from_rgb_hex(0x008080));
        Ok(())
    }

    #[test]
    fn test_not_found() {
        let registry = ColorRegistry::builtin();
        assert_eq!(
            registry.dictionary("Pantone").err(),
            Some(NotFoundError::dictionary("Pantone"))
        );
        assert_eq!(
            registry.color_named("Mauve", "css").err(),
            Some(NotFoundError::color(Some("CSS"), "Mauve"))
        );
        assert_eq!(
            registry.color_named("Red", "Pantone").err(),
            Some(NotFoundError::dictionary("Pantone"))
        );
        assert_eq!(
            registry.color_with_name("Mauve").err(),
            Some(NotFoundError::color(None, "Mauve"))
        );
    }

    #[test]
    fn test_custom_registry() -> Result<(), NotFoundError> {
        let ink = Color::from_rgb_hex(0x1b1b1b);
        let paper = Color::from_rgb_hex(0xf5f1e6);
        let stationery: ColorDictionary = [("Ink", ink), ("Paper", paper)].into_iter().collect();

        let mut registry = ColorRegistry::new().with_dictionary("Stationery", stationery);
        assert!(!registry.register("stationery", ColorDictionary::default()));
        assert!(registry.register("Empty", ColorDictionary::default()));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.color_named("PAPER", "STATIONERY")?, paper);
        assert_eq!(registry.search(&["in"]), vec![("Stationery", "Ink")]);
        assert!(registry.search(&["ink", "paper"]).is_empty());

        assert!(registry.register("Färben", ColorDictionary::default()));
        assert!(!registry.register("FÄRBEN", ColorDictionary::default()));
        assert!(registry.dictionary("färben")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_concurrent_access() {
        let names = ["Red", "Tangerine", "DodgerBlue", "Clear"];
        let counts: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|index| {
                    scope.spawn(move || {
                        let registry = ColorRegistry::builtin();
                        usize::from(registry.color_with_name(names[index % names.len()]).is_ok())
                            + registry.dictionary_names().count()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_default())
                .collect()
        });

        assert_eq!(counts, vec![5; 8]);
    }
}
