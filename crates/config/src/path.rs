//! Path addressing for nested configuration values.
//!
//! Responsibilities:
//! - Parse dotted path strings (`"logger.level"`) into segments.
//! - Accept explicit segment lists (`["logger", "level"]`) as an equivalent form.
//! - Reject malformed paths before they reach the tree.
//!
//! Does NOT handle:
//! - Walking the tree (see `tree.rs`).
//!
//! Invariants:
//! - A `KeyPath` always has at least one segment and no segment is empty.
//! - Explicit segments are taken verbatim; a segment containing `.` addresses a
//!   key with a literal dot.

use std::fmt;

use crate::constants::PATH_SEPARATOR;
use crate::error::{ConfigError, Result};

/// A validated address of one node in the configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path string.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(invalid(path, "path is empty"));
        }

        let segments: Vec<String> = path.split(PATH_SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(invalid(path, "path contains an empty segment"));
        }

        Ok(Self { segments })
    }

    /// Build a path from explicit segments without splitting them.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(invalid("", "segment list is empty"));
        }
        if segments.iter().any(String::is_empty) {
            return Err(invalid(
                &segments.join("."),
                "segment list contains an empty segment",
            ));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent segments and the terminal segment.
    pub(crate) fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            // Unreachable through the constructors, which reject empty lists.
            None => (&[], ""),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

fn invalid(path: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}

/// Conversion into a validated [`KeyPath`].
///
/// Strings are split on `.`; slices, arrays and vectors are explicit segments.
pub trait IntoKeyPath {
    fn into_key_path(self) -> Result<KeyPath>;
}

impl IntoKeyPath for KeyPath {
    fn into_key_path(self) -> Result<KeyPath> {
        Ok(self)
    }
}

impl IntoKeyPath for &KeyPath {
    fn into_key_path(self) -> Result<KeyPath> {
        Ok(self.clone())
    }
}

impl IntoKeyPath for &str {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::parse(self)
    }
}

impl IntoKeyPath for String {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::parse(&self)
    }
}

impl IntoKeyPath for &String {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::parse(self)
    }
}

impl IntoKeyPath for &[&str] {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::from_segments(self.iter().copied())
    }
}

impl IntoKeyPath for &[String] {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::from_segments(self.iter().cloned())
    }
}

impl<const N: usize> IntoKeyPath for [&str; N] {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::from_segments(self)
    }
}

impl IntoKeyPath for Vec<&str> {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::from_segments(self)
    }
}

impl IntoKeyPath for Vec<String> {
    fn into_key_path(self) -> Result<KeyPath> {
        KeyPath::from_segments(self)
    }
}
