//! YAML documents.
//!
//! Every document of a multi-document stream is returned in order. Mapping keys
//! that are numbers or booleans are stringified; tags are dropped in favour of
//! the tagged value.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::TextToTree;
use crate::error::{ConfigError, Result};

/// YAML parser backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl TextToTree for YamlParser {
    fn parse(&self, text: &str) -> Result<Vec<Value>> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            let value = serde_yaml::Value::deserialize(document)?;
            documents.push(yaml_to_value(value)?);
        }
        Ok(documents)
    }
}

fn yaml_to_value(value: serde_yaml::Value) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => number_to_value(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(key_to_string(key)?, yaml_to_value(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value)?,
    })
}

fn number_to_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key_to_string(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => key_to_string(tagged.value),
        serde_yaml::Value::Sequence(_) => Err(ConfigError::InvalidSource {
            kind: "mapping with a sequence key".to_string(),
        }),
        serde_yaml::Value::Mapping(_) => Err(ConfigError::InvalidSource {
            kind: "mapping with a mapping key".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_scalar() {
        let docs = YamlParser.parse("port: 3000").unwrap();
        assert_eq!(docs, vec![json!({"port": 3000})]);
    }

    #[test]
    fn test_parse_nested() {
        let text = "logger:\n  level: debug\n  targets:\n    - stdout\n    - file\nratio: 0.25\n";
        let docs = YamlParser.parse(text).unwrap();
        assert_eq!(
            docs,
            vec![json!({
                "logger": {"level": "debug", "targets": ["stdout", "file"]},
                "ratio": 0.25
            })]
        );
    }

    #[test]
    fn test_parse_multiple_documents() {
        let docs = YamlParser.parse("port: 1\n---\nport: 2\nhost: x\n").unwrap();
        assert_eq!(docs, vec![json!({"port": 1}), json!({"port": 2, "host": "x"})]);
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let docs = YamlParser.parse("404: missing\ntrue: yes\n").unwrap();
        assert_eq!(docs, vec![json!({"404": "missing", "true": "yes"})]);
    }

    #[test]
    fn test_tag_is_dropped() {
        let docs = YamlParser.parse("secret: !vault abc\n").unwrap();
        assert_eq!(docs, vec![json!({"secret": "abc"})]);
    }

    #[test]
    fn test_sequence_key_is_rejected() {
        let result = YamlParser.parse("? [a, b]\n: value\n");
        assert!(matches!(result, Err(ConfigError::InvalidSource { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = YamlParser.parse("port: [1, 2\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
