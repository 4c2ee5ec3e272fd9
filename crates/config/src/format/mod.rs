//! Text-to-tree parsers for the supported configuration formats.
//!
//! Responsibilities:
//! - Map file extensions to a [`Format`].
//! - Turn format text into generic `serde_json::Value` documents.
//!
//! Does NOT handle:
//! - Merging documents into the store (see `configuration/loader.rs`).
//! - Reading files from disk.
//!
//! Invariants:
//! - Parsers never touch the store; a parse failure leaves no trace.
//! - Each parser returns one value per document, in document order.

mod dotenv;
mod json;
mod toml;
mod xml;
mod yaml;

use std::fmt;

use serde_json::Value;

use crate::constants::{
    EXTENSION_ENV, EXTENSION_JSON, EXTENSION_TOML, EXTENSION_XML, EXTENSIONS_YAML,
};
use crate::error::Result;

pub use self::dotenv::DotenvParser;
pub use self::json::JsonParser;
pub use self::toml::TomlParser;
pub use self::xml::XmlParser;
pub use self::yaml::YamlParser;

/// Parses format-specific text into configuration documents.
pub trait TextToTree {
    /// Parse `text` into one value per document.
    fn parse(&self, text: &str) -> Result<Vec<Value>>;
}

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
    Xml,
    Env,
}

impl Format {
    /// Look up a format by file extension (without the dot), ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            EXTENSION_JSON => Some(Format::Json),
            EXTENSION_TOML => Some(Format::Toml),
            EXTENSION_XML => Some(Format::Xml),
            EXTENSION_ENV => Some(Format::Env),
            other if EXTENSIONS_YAML.contains(&other) => Some(Format::Yaml),
            _ => None,
        }
    }

    /// The parser for this format.
    pub fn parser(self) -> &'static dyn TextToTree {
        match self {
            Format::Json => &JsonParser,
            Format::Toml => &TomlParser,
            Format::Yaml => &YamlParser,
            Format::Xml => &XmlParser,
            Format::Env => &DotenvParser,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
            Format::Env => "env",
        };
        f.write_str(name)
    }
}
