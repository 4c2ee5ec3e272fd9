//! TOML documents.
//!
//! Datetimes have no counterpart in the tree's value model and are stored as
//! their RFC 3339 string form.

use serde_json::{Map, Number, Value};

use super::TextToTree;
use crate::error::Result;

/// TOML parser backed by the `toml` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl TextToTree for TomlParser {
    fn parse(&self, text: &str) -> Result<Vec<Value>> {
        let table: toml::Table = toml::from_str(text)?;
        Ok(vec![table_to_value(table)])
    }
}

fn table_to_value(table: toml::Table) -> Value {
    let map: Map<String, Value> = table
        .into_iter()
        .map(|(key, value)| (key, toml_to_value(value)))
        .collect();
    Value::Object(map)
}

fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => table_to_value(table),
    }
}
