//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `--set KEY=VALUE` pairs.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration sources (see `dispatch::load_sources`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "treeconf")]
#[command(
    about = "treeconf - Merge JSON, TOML, YAML, XML and dotenv configuration and query it by path",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  treeconf -f defaults.toml -f site.yaml get server.port\n  treeconf -f .env has API_TOKEN\n  treeconf -f config.json --set logger.level=debug dump -o yaml\n  TREECONF_FILES=base.json,local.yaml treeconf dump\n"
)]
pub struct Cli {
    /// Configuration file to load; repeatable, later files win
    #[arg(
        short,
        long = "file",
        global = true,
        env = "TREECONF_FILES",
        value_delimiter = ',',
        value_name = "FILE"
    )]
    pub files: Vec<PathBuf>,

    /// Set a value after all files are loaded; VALUE is read as JSON, else as a string
    #[arg(
        long = "set",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_key_value
    )]
    pub overrides: Vec<(String, String)>,

    /// Output format for non-string values
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value at a dotted path
    Get {
        /// Dotted path (e.g. 'logger.level' or 'servers.0.host')
        path: String,

        /// Value to print when nothing is stored at the path
        #[arg(long)]
        default: Option<String>,
    },

    /// Print whether a path is present (exit code 4 when absent)
    Has {
        /// Dotted path
        path: String,
    },

    /// Print the whole merged configuration
    Dump,

    /// Print a process environment variable
    Env {
        /// Variable name, looked up verbatim
        key: String,

        /// Value to print when the variable is not set
        #[arg(long)]
        default: Option<String>,
    },
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
