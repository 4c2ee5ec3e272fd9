//! Tests for the configuration facade.
//!
//! Responsibilities:
//! - Test path-addressed reads and writes on the shared instance.
//! - Test loading from objects, text in every format, and files.
//! - Test environment reads and their separation from dotenv loading.
//!
//! Invariants:
//! - Every test takes `fixture()` first; the instance is process-wide, so tests
//!   must not observe each other's writes.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::json;

use super::Configuration;


/// Returns the global test lock guarding the shared instance.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Lock the shared instance and reset it to `{port: 8080, logger: {level: "debug"}}`.
pub fn fixture() -> (MutexGuard<'static, ()>, &'static Configuration) {
    let guard = env_lock().lock().unwrap_or_else(PoisonError::into_inner);
    let config = Configuration::instance();
    config.clear();
    config
        .load(json!({"port": 8080, "logger": {"level": "debug"}}))
        .unwrap();
    (guard, config)
}
