//! The in-memory configuration tree and its raw path operations.
//!
//! Responsibilities:
//! - Own the canonical tree of mappings, sequences and scalars.
//! - Deep-merge loaded sources into the tree.
//! - Resolve, write, remove and test nodes addressed by a [`KeyPath`].
//!
//! Does NOT handle:
//! - Default values or transforms on read (see `configuration/options.rs`).
//! - Locking or the process-wide instance (see `configuration/mod.rs`).
//!
//! Invariants:
//! - Only mapping nodes are merged recursively; every other node is replaced whole.
//! - A numeric segment indexes a sequence only when the node there is a sequence.
//! - `remove` never prunes ancestors left empty by a removal.
//! - A write never turns a sequence into a mapping; non-index segments under a
//!   sequence are rejected.

use serde_json::{Map, Value};

use crate::constants::MAX_SEQUENCE_PADDING;
use crate::error::{ConfigError, Result};
use crate::path::KeyPath;

/// Deep-merge `source` into `target`; later values win at leaf granularity.
///
/// Sequences and scalars are replaced wholesale, never concatenated.
pub fn merge_into(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        match (target.get_mut(&key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            (Some(existing), incoming) => *existing = incoming,
            (None, incoming) => {
                target.insert(key, incoming);
            }
        }
    }
}

/// A rooted configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTree {
    root: Map<String, Value>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a source mapping into the tree.
    pub fn merge(&mut self, source: Map<String, Value>) {
        merge_into(&mut self.root, source);
    }

    /// Return the node at `path`, or `None` if any segment is missing.
    pub fn resolve(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.root.get(first)?;
        for segment in rest {
            node = child(node, segment)?;
        }
        Some(node)
    }

    /// True if a node exists at `path`, whatever its value.
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.resolve(path).is_some()
    }

    /// Set the node at `path`, creating intermediate mappings as needed.
    ///
    /// Returns the value written.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPath` when a segment under a sequence is not a
    /// canonical index, or when reaching the index would pad the sequence with
    /// more than [`MAX_SEQUENCE_PADDING`] nulls.
    pub fn write(&mut self, path: &KeyPath, value: Value) -> Result<Value> {
        tracing::trace!(path = %path, "Writing configuration value");

        let (parents, last) = path.split_last();
        let mut container = &mut self.root;
        let mut parents = parents.iter();

        // Walk mapping levels; a sequence level is handed off to `write_in_node`.
        while let Some(segment) = parents.next() {
            let node = container
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !matches!(node, Value::Object(_) | Value::Array(_)) {
                *node = Value::Object(Map::new());
            }
            match node {
                Value::Object(map) => container = map,
                other => {
                    let remaining: Vec<&String> = parents.by_ref().collect();
                    write_in_node(other, &remaining, last, value.clone(), path)?;
                    return Ok(value);
                }
            }
        }

        container.insert(last.to_string(), value.clone());
        Ok(value)
    }

    /// Remove the node at `path`. Returns whether anything was removed.
    pub fn remove(&mut self, path: &KeyPath) -> bool {
        let (parents, last) = path.split_last();

        let removed = match parents.split_first() {
            None => self.root.shift_remove(last).is_some(),
            Some((first, rest)) => {
                let mut node = self.root.get_mut(first);
                for segment in rest {
                    node = node.and_then(|n| child_mut(n, segment));
                }
                match node {
                    Some(Value::Object(map)) => map.shift_remove(last).is_some(),
                    Some(Value::Array(items)) => match sequence_index(last) {
                        Some(index) if index < items.len() => {
                            items.remove(index);
                            true
                        }
                        _ => false,
                    },
                    _ => false,
                }
            }
        };

        if removed {
            tracing::trace!(path = %path, "Removed configuration value");
        }
        removed
    }

    /// Deep copy of the whole tree.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.root.clone()
    }

    pub fn clear(&mut self) {
        self.root = Map::new();
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }
}

impl From<Map<String, Value>> for SourceTree {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(sequence_index(segment)?),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(sequence_index(segment)?),
        _ => None,
    }
}

/// Parse a canonical sequence index: `0`, or digits without a leading zero or sign.
fn sequence_index(segment: &str) -> Option<usize> {
    let canonical = match segment.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical { segment.parse().ok() } else { None }
}

/// Write below an arbitrary container node, descending mappings and sequences.
fn write_in_node(
    node: &mut Value,
    parents: &[&String],
    last: &str,
    value: Value,
    path: &KeyPath,
) -> Result<()> {
    match parents.split_first() {
        Some((segment, rest)) => {
            let next = slot(node, segment, path)?;
            if !matches!(next, Value::Object(_) | Value::Array(_)) {
                *next = Value::Object(Map::new());
            }
            write_in_node(next, rest, last, value, path)
        }
        None => {
            *slot(node, last, path)? = value;
            Ok(())
        }
    }
}

/// Return a mutable slot for `segment` under `node`, creating it if missing.
///
/// Sequences are indexed by canonical numeric segments and padded with nulls
/// up to the index. Any other node is addressed as a mapping.
fn slot<'a>(node: &'a mut Value, segment: &str, path: &KeyPath) -> Result<&'a mut Value> {
    let index = match node {
        Value::Array(_) => Some(
            sequence_index(segment)
                .ok_or_else(|| invalid_write(path, "segment under a sequence is not an index"))?,
        ),
        _ => None,
    };

    match (node, index) {
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                if index - items.len() > MAX_SEQUENCE_PADDING {
                    return Err(invalid_write(path, "sequence index is too far past the end"));
                }
                items.resize(index + 1, Value::Null);
            }
            Ok(&mut items[index])
        }
        (node, _) => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            // Indexing a mapping by key inserts null when the key is missing.
            Ok(&mut node[segment])
        }
    }
}

fn invalid_write(path: &KeyPath, reason: &'static str) -> ConfigError {
    ConfigError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}
