//! `dump` command: print the whole merged tree.

use anyhow::Result;
use serde_json::Value;
use treeconf_config::Configuration;

use crate::formatters::{OutputFormat, format_value};

pub fn run(config: &Configuration, output: OutputFormat) -> Result<()> {
    let tree = Value::Object(config.source());
    println!("{}", format_value(&tree, output)?);
    Ok(())
}
