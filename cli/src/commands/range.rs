use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ranging::process::{config_load, range_once};

use crate::commands::pulse::WaveCommand;

#[derive(Args)]
pub struct RangeArgs {
    #[command(subcommand)]
    pub wave: WaveCommand,
    /// Config file (defaults otherwise)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Dump both envelopes as <prefix>_left.txt / <prefix>_right.txt
    #[arg(long)]
    pub env_out: Option<PathBuf>,
}

pub fn handle(args: RangeArgs) -> Result<()> {
    let cfg = config_load(args.config.as_deref())?;
    range_once(cfg, &args.wave.to_waveform(), args.env_out.as_deref())
}
