use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use ctrl::process::{ctrl_errors, ctrl_gain, ctrl_ping, ctrl_rate};
use ranging::process::config_load;

#[derive(Subcommand)]
pub enum CtrlCommands {
    /// ENQ/ACK round trip
    Ping {
        #[arg(long)]
        device: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Query the ADC sampling rate, or set it first with --set
    Rate {
        #[arg(long)]
        set: Option<u32>,
        #[arg(long)]
        device: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Set the amplifier gain
    Gain {
        value: u32,
        #[arg(long)]
        device: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Read the board's pulse/ADC error counters
    Errors {
        #[arg(long)]
        device: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn handle(cmd: CtrlCommands) -> Result<()> {
    match cmd {
        CtrlCommands::Ping { device, config } => {
            let cfg = config_load(config.as_deref())?;
            ctrl_ping(&device.unwrap_or_else(|| cfg.ctrl_path.clone()), cfg.baud)
        }
        CtrlCommands::Rate {
            set,
            device,
            config,
        } => {
            let cfg = config_load(config.as_deref())?;
            ctrl_rate(
                &device.unwrap_or_else(|| cfg.ctrl_path.clone()),
                cfg.baud,
                set,
            )
        }
        CtrlCommands::Gain {
            value,
            device,
            config,
        } => {
            let cfg = config_load(config.as_deref())?;
            ctrl_gain(
                &device.unwrap_or_else(|| cfg.ctrl_path.clone()),
                cfg.baud,
                value,
            )
        }
        CtrlCommands::Errors { device, config } => {
            let cfg = config_load(config.as_deref())?;
            ctrl_errors(&device.unwrap_or_else(|| cfg.ctrl_path.clone()), cfg.baud)
        }
    }
}
