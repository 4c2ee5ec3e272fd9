//! Command handlers, one module per subcommand.

pub mod dump;
pub mod env;
pub mod get;
pub mod has;

use serde_json::Value;

/// Read a command-line value as JSON, falling back to a plain string.
///
/// `8080` and `true` keep their types; `debug` and `"8080"` become strings.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
