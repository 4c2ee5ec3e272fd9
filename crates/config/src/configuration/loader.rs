//! Loading sources into the configuration tree.
//!
//! Responsibilities:
//! - Merge in-memory sources and parsed text into the tree.
//! - Dispatch files to the matching parser by extension.
//!
//! Does NOT handle:
//! - Format grammars (see `format/`).
//! - Watching files or reloading on change.
//!
//! Invariants:
//! - Text is fully parsed and every document validated before the tree is locked,
//!   so a failed load leaves the tree untouched.
//! - All documents of one load are merged under a single write lock.
//! - Later loads win over earlier ones at leaf granularity.
//! - Parser errors are returned as-is; nothing is retried or suppressed.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use super::Configuration;
use crate::error::{ConfigError, Result, value_kind};
use crate::format::{Format, TextToTree};

impl Configuration {
    /// Deep-merge an in-memory source. A `null` source is ignored.
    pub fn load(&self, source: impl Into<Value>) -> Result<()> {
        self.merge_documents(vec![source.into()], "object")
    }

    /// Deep-merge any serializable value, e.g. a typed defaults struct.
    pub fn load_serialized<S: Serialize + ?Sized>(&self, source: &S) -> Result<()> {
        let value = serde_json::to_value(source)?;
        self.merge_documents(vec![value], "serialized")
    }

    /// Parse `text` with a caller-supplied parser and merge every document.
    pub fn load_with(&self, parser: &dyn TextToTree, text: &str) -> Result<()> {
        let documents = parser.parse(text)?;
        self.merge_documents(documents, "custom")
    }

    pub fn load_from_json(&self, json: &str) -> Result<()> {
        self.load_format(Format::Json, json)
    }

    pub fn load_from_toml(&self, toml: &str) -> Result<()> {
        self.load_format(Format::Toml, toml)
    }

    /// Load YAML text; every document of a multi-document stream is merged in order.
    pub fn load_from_yml(&self, yaml: &str) -> Result<()> {
        self.load_format(Format::Yaml, yaml)
    }

    /// Alias of [`Configuration::load_from_yml`].
    pub fn load_from_yaml(&self, yaml: &str) -> Result<()> {
        self.load_from_yml(yaml)
    }

    pub fn load_from_xml(&self, xml: &str) -> Result<()> {
        self.load_format(Format::Xml, xml)
    }

    /// Load dotenv text (`KEY=VALUE` lines) into the tree.
    ///
    /// This does not touch the process environment; `get_env` will not see these keys.
    pub fn load_from_env(&self, env: &str) -> Result<()> {
        self.load_format(Format::Env, env)
    }

    /// Load a file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if `file` does not exist.
    /// - `ConfigError::UnsupportedFormat` if the extension is not one of
    ///   `env`, `yml`, `yaml`, `xml`, `toml`, `json`.
    /// - `ConfigError::ConfigFileRead` if the file cannot be read.
    /// - The parser's error if the content is invalid.
    pub fn load_from_file(&self, file: impl AsRef<Path>) -> Result<()> {
        let path = file.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = file_extension(path);
        let format = Format::from_extension(&extension)
            .ok_or(ConfigError::UnsupportedFormat { extension })?;

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            format = %format,
            "Loading configuration file"
        );
        self.load_format(format, &text)
    }

    fn load_format(&self, format: Format, text: &str) -> Result<()> {
        let documents = format.parser().parse(text)?;
        self.merge_documents(documents, &format.to_string())
    }

    fn merge_documents(&self, documents: Vec<Value>, origin: &str) -> Result<()> {
        let mut sources: Vec<Map<String, Value>> = Vec::with_capacity(documents.len());
        for document in documents {
            match document {
                Value::Object(map) => sources.push(map),
                Value::Null => {}
                other => {
                    return Err(ConfigError::InvalidSource {
                        kind: value_kind(&other).to_string(),
                    });
                }
            }
        }

        let mut tree = self.write_tree();
        for source in sources {
            let keys = source.len();
            tree.merge(source);
            tracing::debug!(origin, keys, "Merged configuration source");
        }

        Ok(())
    }
}

/// Text after the last `.` of the file name; `.env` yields `env`, `config` yields "".
fn file_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default()
}
