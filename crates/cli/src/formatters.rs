//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render configuration values as JSON, YAML or TOML.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Output carries no trailing newline; callers print with `println!`.
//! - TOML cannot hold `null`; such values fail instead of being dropped.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

/// Render `value` in `format`.
pub fn format_value(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
        OutputFormat::Toml => format_toml(value),
    }
}

/// Tables render as a document; anything else as an inline TOML value.
fn format_toml(value: &Value) -> Result<String> {
    let value = toml::Value::try_from(value).context("Value cannot be represented as TOML")?;
    match value {
        toml::Value::Table(table) => Ok(toml::to_string_pretty(&table)?.trim_end().to_string()),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({"port": 8080, "logger": {"level": "debug"}})
    }

    #[test]
    fn test_json_is_pretty() {
        let output = format_value(&sample(), OutputFormat::Json).unwrap();
        assert!(output.contains("\n  \"port\": 8080"));
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), sample());
    }

    #[test]
    fn test_yaml_round_trips() {
        let output = format_value(&sample(), OutputFormat::Yaml).unwrap();
        assert!(output.contains("port: 8080"));
        assert!(!output.ends_with('\n'));
        assert_eq!(serde_yaml::from_str::<Value>(&output).unwrap(), sample());
    }

    #[test]
    fn test_toml_table() {
        let output = format_value(&sample(), OutputFormat::Toml).unwrap();
        assert!(output.contains("port = 8080"));
        assert!(output.contains("[logger]"));
        assert!(output.contains("level = \"debug\""));
    }

    #[test]
    fn test_toml_scalar_and_array() {
        assert_eq!(format_value(&json!(8080), OutputFormat::Toml).unwrap(), "8080");
        let array = format_value(&json!([1, 2]), OutputFormat::Toml).unwrap();
        assert_eq!(array.replace(' ', ""), "[1,2]");
    }

    #[test]
    fn test_toml_rejects_null() {
        assert!(format_value(&json!({"a": null}), OutputFormat::Toml).is_err());
    }
}
