use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use ranging::process::config_init;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration as JSON
    Init {
        /// Output path
        output: PathBuf,
    },
}

pub fn handle(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { output } => config_init(&output),
    }
}
