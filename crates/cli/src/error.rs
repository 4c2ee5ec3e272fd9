//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `CliError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use thiserror::Error;
use treeconf_config::ConfigError;

/// Structured exit codes for treeconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Source unavailable - file missing, unreadable, or of an unsupported type.
    ///
    /// Scripts should check the file list.
    SourceUnavailable = 2,

    /// Parse error - a source was read but its content is invalid.
    ParseError = 3,

    /// Not found - no value at the requested path or variable name.
    NotFound = 4,

    /// Invalid path - the path itself is malformed (e.g. `a..b`).
    InvalidPath = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Lookup failures raised by the commands themselves.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Key not found: {path}")]
    KeyNotFound { path: String },

    #[error("Environment variable not set: {key}")]
    EnvNotSet { key: String },
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileNotFound { .. }
            | ConfigError::UnsupportedFormat { .. }
            | ConfigError::ConfigFileRead { .. } => ExitCode::SourceUnavailable,
            ConfigError::InvalidPath { .. } => ExitCode::InvalidPath,
            ConfigError::InvalidSource { .. } => ExitCode::ParseError,
            err if err.is_parse_error() => ExitCode::ParseError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::KeyNotFound { .. } | CliError::EnvNotSet { .. } => ExitCode::NotFound,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::SourceUnavailable.as_i32(), 2);
        assert_eq!(ExitCode::ParseError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::InvalidPath.as_i32(), 5);
    }

    #[test]
    fn test_from_config_error_file_not_found() {
        let err = ConfigError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SourceUnavailable);
    }

    #[test]
    fn test_from_config_error_unsupported_format() {
        let err = ConfigError::UnsupportedFormat {
            extension: "ini".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SourceUnavailable);
    }

    #[test]
    fn test_from_config_error_parse() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ExitCode::from(&ConfigError::from(source)), ExitCode::ParseError);

        let err = ConfigError::DotenvParse { error_index: 3 };
        assert_eq!(ExitCode::from(&err), ExitCode::ParseError);
    }

    #[test]
    fn test_from_config_error_invalid_path() {
        let err = ConfigError::InvalidPath {
            path: "a..b".to_string(),
            reason: "empty segment",
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidPath);
    }

    #[test]
    fn test_from_cli_error_not_found() {
        let err = CliError::KeyNotFound {
            path: "a.b".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(ConfigError::UnsupportedFormat {
            extension: "txt".to_string(),
        })
        .context("Failed to load config.txt")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::SourceUnavailable);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
