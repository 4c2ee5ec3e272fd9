//! Shared test utilities for treeconf integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: no `.env` loading and no inherited `TREECONF_FILES`.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `treeconf` command for integration testing.
pub fn treeconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("treeconf");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("TREECONF_FILES").env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write test file");
    path
}
