//! `get` command: print the value at a path.

use anyhow::Result;
use serde_json::Value;
use treeconf_config::Configuration;

use super::parse_value;
use crate::error::CliError;
use crate::formatters::{OutputFormat, format_value};

pub fn run(
    config: &Configuration,
    path: &str,
    default: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let value = match default {
        Some(raw) => config.get_or(path, parse_value(raw))?,
        None => config.get(path)?.ok_or_else(|| CliError::KeyNotFound {
            path: path.to_string(),
        })?,
    };

    println!("{}", render(&value, output)?);
    Ok(())
}

/// Strings are printed raw so shell scripts can use them directly.
fn render(value: &Value, output: OutputFormat) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => format_value(other, output),
    }
}
