//! Error types for the configuration store.
//!
//! Responsibilities:
//! - Define error variants for every failure of loading, parsing and path addressing.
//! - Carry format-parser errors unchanged so callers can inspect the library error.
//!
//! Does NOT handle:
//! - Failures raised by caller-supplied transforms (those are the caller's `T`).
//! - Exit-code mapping (see `crates/cli`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, extensions, value kinds).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Errors that can occur while loading or addressing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported configuration file extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to read config file at {}: {source}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// A loaded source was not a mapping (e.g. a JSON array or a bare scalar).
    #[error("Configuration source must be a mapping, got {kind}")]
    InvalidSource { kind: String },

    #[error("Invalid value at {path}: {message}")]
    InvalidValue { path: String, message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("XML element <{element}> is never closed")]
    XmlUnclosed { element: String },

    /// Failed to parse dotenv text due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse .env content at position {error_index}")]
    DotenvParse { error_index: usize },

    /// Failed to read dotenv content due to an I/O error.
    #[error("Failed to read .env content: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env content")]
    DotenvUnknown,
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => ConfigError::DotenvParse { error_index },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}

impl ConfigError {
    /// Returns true if the error came from a format parser rejecting its input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Json(_)
                | ConfigError::Yaml(_)
                | ConfigError::Toml(_)
                | ConfigError::Xml(_)
                | ConfigError::XmlUnclosed { .. }
                | ConfigError::DotenvParse { .. }
                | ConfigError::DotenvIo { .. }
                | ConfigError::DotenvUnknown
        )
    }
}

/// Short human name for the shape of a value, used in error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "sequence",
        serde_json::Value::Object(_) => "mapping",
    }
}
