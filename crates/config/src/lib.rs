//! Hierarchical configuration store for treeconf.
//!
//! This crate provides a process-wide tree of settings populated from in-memory
//! objects and JSON, TOML, YAML, XML and dotenv text or files, and read back
//! through dotted-path accessors.
//!
//! ```rust,ignore
//! use treeconf_config::Configuration;
//!
//! let config = Configuration::instance();
//! config.load_from_yaml("port: 8080\nlogger:\n  level: debug\n")?;
//! config.load_from_json(r#"{"port": 3000}"#)?;
//!
//! assert_eq!(config.get("port")?, Some(3000.into()));
//! assert_eq!(config.get(["logger", "level"])?, Some("debug".into()));
//! ```

pub mod constants;
mod configuration;
mod error;
pub mod format;
mod path;
mod tree;

pub use configuration::{Configuration, ReadOptions};
pub use error::{ConfigError, Result};
pub use format::{Format, TextToTree};
pub use path::{IntoKeyPath, KeyPath};
pub use tree::{SourceTree, merge_into};
