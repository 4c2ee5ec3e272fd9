//! `has` command: report whether a path is present.

use anyhow::Result;
use treeconf_config::Configuration;

use crate::error::CliError;

/// Prints `true` or `false`; an absent path also fails with `KeyNotFound`.
pub fn run(config: &Configuration, path: &str) -> Result<()> {
    let present = config.has(path)?;
    println!("{present}");

    if present {
        Ok(())
    } else {
        Err(CliError::KeyNotFound {
            path: path.to_string(),
        }
        .into())
    }
}
