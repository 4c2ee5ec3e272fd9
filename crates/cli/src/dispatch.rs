//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load configuration sources in command-line order.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Output rendering (see `formatters` module).
//!
//! Invariants:
//! - Files are loaded before `--set` overrides, each in the order given.
//! - A source that fails to load aborts the command before anything is printed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use treeconf_config::Configuration;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let config = Configuration::instance();
    load_sources(config, &cli.files, &cli.overrides)?;

    match cli.command {
        Commands::Get { path, default } => {
            commands::get::run(config, &path, default.as_deref(), cli.output)?;
        }
        Commands::Has { path } => {
            commands::has::run(config, &path)?;
        }
        Commands::Dump => {
            commands::dump::run(config, cli.output)?;
        }
        Commands::Env { key, default } => {
            commands::env::run(config, &key, default.as_deref())?;
        }
    }

    Ok(())
}

fn load_sources(
    config: &Configuration,
    files: &[PathBuf],
    overrides: &[(String, String)],
) -> Result<()> {
    for file in files {
        config
            .load_from_file(file)
            .with_context(|| format!("Failed to load {}", file.display()))?;
    }

    for (key, raw) in overrides {
        config
            .set(key.as_str(), commands::parse_value(raw))
            .with_context(|| format!("Invalid --set key '{key}'"))?;
    }

    tracing::debug!(
        files = files.len(),
        overrides = overrides.len(),
        "Configuration sources loaded"
    );
    Ok(())
}
