use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{adc, config, ctrl, pulse, range};

#[derive(Parser)]
#[command(name = "sonar-cli")]
#[command(about = "CLI for the ultrasonic time-of-flight ranging rig", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pulse operations (generate/send bitstreams)
    #[command(subcommand)]
    Pulse(pulse::PulseCommands),
    /// ADC operations (one-shot capture, decode dumps)
    #[command(subcommand)]
    Adc(adc::AdcCommands),
    /// Control-port operations (ENQ/ACK, gain, error counters)
    #[command(subcommand)]
    Ctrl(ctrl::CtrlCommands),
    /// Full ranging measurement (transmit + capture + correlate)
    Range(range::RangeArgs),
    /// Configuration operations
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pulse(cmd) => pulse::handle(cmd),
        Commands::Adc(cmd) => adc::handle(cmd),
        Commands::Ctrl(cmd) => ctrl::handle(cmd),
        Commands::Range(args) => range::handle(args),
        Commands::Config(cmd) => config::handle(cmd),
    }
}
