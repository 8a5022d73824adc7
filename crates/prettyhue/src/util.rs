/// The environment variable naming the dictionary for closest color names.
pub(crate) const DICTIONARY_VAR: &str = "PRETTYHUE_DICTIONARY";

/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

/// Determine the configured dictionary for closest color names.
///
/// This function returns `None` if the environment variable is undefined,
/// empty, or not valid Unicode.
pub(crate) fn dictionary_from_environment<E: Environment>(env: &E) -> Option<String> {
    if !env.is_non_empty(DICTIONARY_VAR) {
        return None;
    }

    match env.read(DICTIONARY_VAR) {
        Ok(name) => Some(name),
        Err(error) => {
            tracing::warn!(%error, "ignoring {}", DICTIONARY_VAR);
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::{dictionary_from_environment, Environment, DICTIONARY_VAR};
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set<K, V>(&mut self, key: K, value: V) -> &mut Self
        where
            K: AsRef<str>,
            V: AsRef<str>,
        {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_dictionary_from_environment() {
        let mut env = FakeEnv::new();
        assert_eq!(dictionary_from_environment(&env), None);

        env.set(DICTIONARY_VAR, "");
        assert_eq!(dictionary_from_environment(&env), None);

        env.set(DICTIONARY_VAR, "Crayons");
        assert_eq!(dictionary_from_environment(&env), Some("Crayons".to_string()));
        assert_eq!(env.read("UNDEFINED"), Err(std::env::VarError::NotPresent));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
