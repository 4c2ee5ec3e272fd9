//! `env` command: print a process environment variable.

use anyhow::Result;
use treeconf_config::Configuration;

use crate::error::CliError;

pub fn run(config: &Configuration, key: &str, default: Option<&str>) -> Result<()> {
    let value = match default {
        Some(default) => config.get_env_or(key, default),
        None => config.get_env(key).ok_or_else(|| CliError::EnvNotSet {
            key: key.to_string(),
        })?,
    };

    println!("{value}");
    Ok(())
}
