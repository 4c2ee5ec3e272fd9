//! The process-wide configuration facade.
//!
//! Responsibilities:
//! - Own the single configuration tree behind a lock.
//! - Provide path-addressed `get`/`set`/`unset`/`has`/`clear` with default and transform policy.
//! - Expose the load pipeline (see `loader.rs`) and environment reads (see `env.rs`).
//!
//! Does NOT handle:
//! - Raw tree walking and merging (see `tree.rs`).
//! - Format grammars (see `format/`).
//!
//! Invariants / Assumptions:
//! - Exactly one `Configuration` exists per process, created lazily by `instance()`.
//! - Reads return copies; no caller ever holds a reference into the tree.
//! - A stored `null` reads as absent, while `has` still reports the key as present.
//! - Transforms run after the lock is released, so they may read the configuration.

mod env;
mod loader;
mod options;

#[cfg(test)]
mod tests;

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::path::{IntoKeyPath, KeyPath};
use crate::tree::SourceTree;

pub use options::ReadOptions;

static INSTANCE: OnceLock<Configuration> = OnceLock::new();

/// Hierarchical configuration store shared by the whole process.
#[derive(Debug)]
pub struct Configuration {
    tree: RwLock<SourceTree>,
}

impl Configuration {
    fn new() -> Self {
        Self {
            tree: RwLock::new(SourceTree::new()),
        }
    }

    /// The process-wide instance, created empty on first access.
    pub fn instance() -> &'static Configuration {
        INSTANCE.get_or_init(Configuration::new)
    }

    /// Get a copy of the value at `path`.
    ///
    /// ```rust,ignore
    /// // { "port": 8080, "logger": { "level": "debug" } }
    /// config.get("port")?;               // Some(8080)
    /// config.get("logger")?;             // Some({ "level": "debug" })
    /// config.get("logger.level")?;       // Some("debug")
    /// config.get(["logger", "level"])?;  // Some("debug")
    /// ```
    pub fn get(&self, path: impl IntoKeyPath) -> Result<Option<Value>> {
        let path = path.into_key_path()?;
        Ok(self.lookup(&path))
    }

    /// Get the value at `path`, or `default` when nothing is stored there.
    pub fn get_or(&self, path: impl IntoKeyPath, default: impl Into<Value>) -> Result<Value> {
        Ok(self.get(path)?.unwrap_or_else(|| default.into()))
    }

    /// Get the value at `path` through a transform, falling back to the default.
    pub fn get_with<T>(
        &self,
        path: impl IntoKeyPath,
        options: ReadOptions<'_, Value, T>,
    ) -> Result<Option<T>> {
        let raw = self.get(path)?;
        Ok(options.apply(raw))
    }

    /// Deserialize the value at `path` into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: impl IntoKeyPath) -> Result<Option<T>> {
        let path = path.into_key_path()?;
        let Some(value) = self.lookup(&path) else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    /// Set the value at `path`, creating intermediate mappings. Returns the value written.
    ///
    /// Fails with `ConfigError::InvalidPath` when the path runs through a
    /// sequence with a non-index segment or an index far past its end.
    pub fn set(&self, path: impl IntoKeyPath, value: impl Into<Value>) -> Result<Value> {
        let path = path.into_key_path()?;
        self.write_tree().write(&path, value.into())
    }

    /// Remove the value at `path`. Returns whether a value was removed.
    pub fn unset(&self, path: impl IntoKeyPath) -> Result<bool> {
        let path = path.into_key_path()?;
        Ok(self.write_tree().remove(&path))
    }

    /// Check whether a key exists at `path`, even if its value is null or falsy.
    pub fn has(&self, path: impl IntoKeyPath) -> Result<bool> {
        let path = path.into_key_path()?;
        Ok(self.read_tree().contains(&path))
    }

    /// Reset the tree to empty. The instance itself is kept.
    pub fn clear(&self) {
        self.write_tree().clear();
        tracing::debug!("Configuration cleared");
    }

    /// Deep copy of the whole tree.
    pub fn source(&self) -> Map<String, Value> {
        self.read_tree().snapshot()
    }

    fn lookup(&self, path: &KeyPath) -> Option<Value> {
        self.read_tree()
            .resolve(path)
            .filter(|value| !value.is_null())
            .cloned()
    }

    // A panic while holding the lock cannot leave a half-merged tree: merges
    // validate their sources first, and single writes are one map insert.
    fn read_tree(&self) -> RwLockReadGuard<'_, SourceTree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tree(&self) -> RwLockWriteGuard<'_, SourceTree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}
