//! JSON documents.

use serde_json::Value;

use super::TextToTree;
use crate::error::Result;

/// JSON parser backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl TextToTree for JsonParser {
    fn parse(&self, text: &str) -> Result<Vec<Value>> {
        Ok(vec![serde_json::from_str(text)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let docs = JsonParser
            .parse(r#"{"port": 8080, "logger": {"level": "debug"}}"#)
            .unwrap();
        assert_eq!(docs, vec![json!({"port": 8080, "logger": {"level": "debug"}})]);
    }

    #[test]
    fn test_preserves_key_order() {
        let docs = JsonParser.parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = docs[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = JsonParser.parse("{ port: }");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
