//! Reads from the live process environment.
//!
//! Responsibilities:
//! - Look up environment variables by exact name, with default and transform policy.
//!
//! Does NOT handle:
//! - Dotenv text, which is merged into the tree (see `Configuration::load_from_env`).
//!
//! Invariants:
//! - Keys are flat; `"a.b"` is looked up as the literal variable name `a.b`.
//! - An empty value is present, not absent.
//! - The configuration tree is never consulted.

use super::{Configuration, ReadOptions};

impl Configuration {
    /// Get an environment variable.
    pub fn get_env(&self, key: &str) -> Option<String> {
        env_var(key)
    }

    /// Get an environment variable, or `default` when it is not set.
    pub fn get_env_or(&self, key: &str, default: impl Into<String>) -> String {
        env_var(key).unwrap_or_else(|| default.into())
    }

    /// Get an environment variable through a transform, falling back to the default.
    pub fn get_env_with<T>(&self, key: &str, options: ReadOptions<'_, String, T>) -> Option<T> {
        options.apply(env_var(key))
    }
}

/// Read a variable, converting non-UTF-8 values lossily.
fn env_var(key: &str) -> Option<String> {
    // Names the platform cannot hold are never set.
    if key.is_empty() || key.contains(['=', '\0']) {
        return None;
    }
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_handles_unset_and_empty() {
        let key = "_TREECONF_TEST_ENV_VAR";

        temp_env::with_var_unset(key, || {
            assert_eq!(env_var(key), None);
        });

        temp_env::with_var(key, Some(""), || {
            assert_eq!(env_var(key), Some(String::new()), "empty value is present");
        });

        temp_env::with_var(key, Some(" spaced "), || {
            assert_eq!(env_var(key), Some(" spaced ".to_string()), "value is not trimmed");
        });
    }

    #[test]
    fn test_env_var_rejects_impossible_names() {
        assert_eq!(env_var(""), None);
        assert_eq!(env_var("A=B"), None);
        assert_eq!(env_var("A\0B"), None);
    }
}
