//! Centralized constants for the treeconf workspace.
//!
//! This module contains the separators, prefixes and extension names shared by
//! the path, format and file-loading code.

// =============================================================================
// Path Addressing
// =============================================================================

/// Separator between segments of a dotted path string (`"logger.level"`).
pub const PATH_SEPARATOR: char = '.';

// =============================================================================
// File Extensions
// =============================================================================

/// Extension for JSON documents.
pub const EXTENSION_JSON: &str = "json";

/// Extension for TOML documents.
pub const EXTENSION_TOML: &str = "toml";

/// Extensions for YAML documents.
pub const EXTENSIONS_YAML: [&str; 2] = ["yml", "yaml"];

/// Extension for XML documents.
pub const EXTENSION_XML: &str = "xml";

/// Extension for dotenv files. A file named `.env` has this extension.
pub const EXTENSION_ENV: &str = "env";

// =============================================================================
// XML Conversion
// =============================================================================

/// Prefix for keys that hold XML attribute values.
pub const XML_ATTRIBUTE_PREFIX: &str = "@";

/// Key that holds an element's text when it also has attributes or children.
pub const XML_TEXT_KEY: &str = "$text";

// =============================================================================
// Sequence Writes
// =============================================================================

/// Most null slots a single write may add when indexing past the end of a sequence.
pub const MAX_SEQUENCE_PADDING: usize = 1024;
