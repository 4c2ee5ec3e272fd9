//! Dotenv text (`KEY=VALUE` lines).
//!
//! Responsibilities:
//! - Parse dotenv text into a flat mapping of string values.
//!
//! Does NOT handle:
//! - Reading or modifying the process environment (see `Configuration::get_env`).
//!
//! Invariants:
//! - Keys are kept verbatim and never split on `.`.
//! - Values are never expanded: `$VAR` and `${VAR}` stay literal, so the result
//!   depends on the text alone and never on the process environment.
//! - Parse errors report a position only, never the offending line.

use serde_json::{Map, Value};

use super::TextToTree;
use crate::error::Result;

/// Private-use characters tried, in order, as the stand-in for `$`.
const DOLLAR_STAND_INS: std::ops::RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

/// Dotenv parser backed by `dotenvy`, with variable expansion disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvParser;

impl TextToTree for DotenvParser {
    fn parse(&self, text: &str) -> Result<Vec<Value>> {
        // dotenvy expands every unescaped `$`; hide them behind a character
        // absent from the text and put them back in the parsed values.
        let stand_in = DOLLAR_STAND_INS.clone().find(|c| !text.contains(*c));
        let source = match stand_in {
            Some(stand_in) => hide_dollars(text, stand_in),
            None => text.to_string(),
        };

        let mut map = Map::new();
        for item in dotenvy::from_read_iter(source.as_bytes()) {
            let (key, value) = item?;
            let value = match stand_in {
                Some(stand_in) => value.replace(stand_in, "$"),
                None => value,
            };
            map.insert(key, Value::String(value));
        }
        Ok(vec![Value::Object(map)])
    }
}

/// Replace every `$` not escaped by an odd run of backslashes.
///
/// An escaped `\$` is left for dotenvy, which already reads it as a literal `$`.
fn hide_dollars(text: &str, stand_in: char) -> String {
    let mut output = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    for c in text.chars() {
        match c {
            '$' if backslashes % 2 == 0 => output.push(stand_in),
            _ => output.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    output
}
