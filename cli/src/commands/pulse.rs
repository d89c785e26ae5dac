use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use pulse::Waveform;
use pulse::process::{pulse_dump_bits, pulse_dump_hex, pulse_send};
use ranging::process::config_load;

/// Waveform selection shared by `gen`, `send` and `range`.
#[derive(Subcommand, Clone)]
pub enum WaveCommand {
    /// Constant-frequency carrier
    Cf {
        /// Carrier frequency in kHz (1..=5000)
        #[arg(long)]
        freq_khz: u32,
        /// Duty in percent (0..=99)
        #[arg(long, default_value_t = 10)]
        duty: u32,
        /// Bitstream length in bytes
        #[arg(long, default_value_t = 50_000)]
        bytes: usize,
    },
    /// Exponential frequency-modulated chirp
    Fm {
        /// Sweep start in Hz
        #[arg(long)]
        start_hz: f64,
        /// Sweep end in Hz
        #[arg(long)]
        end_hz: f64,
        /// Sweep duration in milliseconds
        #[arg(long)]
        duration_ms: f64,
        /// Duty in percent (0..=99)
        #[arg(long, default_value_t = 50)]
        duty: u32,
    },
}

impl WaveCommand {
    pub fn to_waveform(&self) -> Waveform {
        match *self {
            WaveCommand::Cf {
                freq_khz,
                duty,
                bytes,
            } => Waveform::Cf {
                freq_khz,
                duty_percent: duty,
                byte_length: bytes,
            },
            WaveCommand::Fm {
                start_hz,
                end_hz,
                duration_ms,
                duty,
            } => Waveform::Fm {
                f_start_hz: start_hz,
                f_end_hz: end_hz,
                duration_s: duration_ms / 1000.0,
                duty_percent: duty,
            },
        }
    }
}

#[derive(Args)]
pub struct GenArgs {
    #[command(subcommand)]
    pub wave: WaveCommand,
    /// Hex dump output (16 bytes per line)
    #[arg(long)]
    pub hex_out: Option<PathBuf>,
    /// Bit dump output (100 bits per line)
    #[arg(long)]
    pub bits_out: Option<PathBuf>,
}

#[derive(Args)]
pub struct SendArgs {
    #[command(subcommand)]
    pub wave: WaveCommand,
    /// Transmitter device path (overrides the config)
    #[arg(long)]
    pub device: Option<String>,
    /// Config file providing the safety policy and defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PulseCommands {
    /// Render a bitstream and dump it to text files
    Gen(GenArgs),
    /// Render a bitstream and transmit it through the safety gate
    Send(SendArgs),
}

pub fn handle(cmd: PulseCommands) -> Result<()> {
    match cmd {
        PulseCommands::Gen(args) => {
            let waveform = args.wave.to_waveform();
            if args.hex_out.is_none() && args.bits_out.is_none() {
                anyhow::bail!("nothing to do: pass --hex-out and/or --bits-out");
            }
            if let Some(path) = &args.hex_out {
                pulse_dump_hex(&waveform, path)?;
            }
            if let Some(path) = &args.bits_out {
                pulse_dump_bits(&waveform, path)?;
            }
            Ok(())
        }
        PulseCommands::Send(args) => {
            let cfg = config_load(args.config.as_deref())?;
            let device = args.device.unwrap_or_else(|| cfg.pulse_path.clone());
            pulse_send(
                &device,
                cfg.baud,
                &args.wave.to_waveform(),
                &cfg.safety_policy(),
            )
        }
    }
}
