use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use adc::process::{adc_capture, adc_dump_channels};
use ranging::process::config_load;

#[derive(Subcommand)]
pub enum AdcCommands {
    /// One-shot capture to a raw binary file (no transmit)
    Capture {
        /// Output file for the raw capture
        output: PathBuf,
        /// Bytes to capture (defaults to the config's adc_read_bytes)
        #[arg(long)]
        bytes: Option<usize>,
        /// ADC device path (overrides the config)
        #[arg(long)]
        device: Option<String>,
        /// Config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Decode a raw capture into a two-column L/R text file
    Decode {
        /// Input raw capture
        input: PathBuf,
        /// Output text file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle(cmd: AdcCommands) -> Result<()> {
    match cmd {
        AdcCommands::Capture {
            output,
            bytes,
            device,
            config,
        } => {
            let cfg = config_load(config.as_deref())?;
            let device = device.unwrap_or_else(|| cfg.adc_path.clone());
            adc_capture(
                &device,
                cfg.baud,
                bytes.unwrap_or(cfg.adc_read_bytes),
                cfg.adc_start_timeout_ms,
                cfg.adc_idle_timeout_ms,
                &output,
            )
        }
        AdcCommands::Decode { input, output } => {
            let out_path = match output {
                Some(p) => p,
                None => input.with_extension("txt"),
            };
            adc_dump_channels(&input, &out_path)
        }
    }
}
