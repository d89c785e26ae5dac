use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use port::SerialChannel;

use crate::bits::{duty_estimate, get_bit};
use crate::codec::synthesize;
use crate::safety::SafetyPolicy;
use crate::types::Waveform;
use crate::writer::transmit;

/// Render `waveform` and dump it as hex text, 16 bytes per line.
pub fn pulse_dump_hex(waveform: &Waveform, output: &Path) -> Result<()> {
    let bytes = synthesize(waveform).context("Failed to synthesize waveform")?;

    let mut text = String::new();
    for (i, b) in bytes.iter().enumerate() {
        write!(text, "{b:02X}").unwrap();
        if (i + 1) % 16 == 0 {
            text.push('\n');
        } else {
            text.push(' ');
        }
    }
    if !text.ends_with('\n') {
        text.push('\n');
    }

    fs::write(output, text).context("Failed to write hex dump")?;
    println!("Wrote {} bytes as hex to {:?}", bytes.len(), output);
    Ok(())
}

/// Render `waveform` and dump it as 0/1 characters, 100 bits (10 us) per
/// line.
pub fn pulse_dump_bits(waveform: &Waveform, output: &Path) -> Result<()> {
    let bytes = synthesize(waveform).context("Failed to synthesize waveform")?;

    let total_bits = bytes.len() * 8;
    let mut text = String::new();
    for bit in 0..total_bits {
        text.push(if get_bit(&bytes, bit) { '1' } else { '0' });
        if (bit + 1) % 100 == 0 {
            text.push('\n');
        }
    }
    if !text.ends_with('\n') {
        text.push('\n');
    }

    fs::write(output, text).context("Failed to write bit dump")?;
    println!("Wrote {total_bits} bits to {:?}", output);
    Ok(())
}

/// Render `waveform` and push it out of the device at `devpath`, through
/// the safety gate.
pub fn pulse_send(
    devpath: &str,
    baud: u32,
    waveform: &Waveform,
    policy: &SafetyPolicy,
) -> Result<()> {
    let bytes = synthesize(waveform).context("Failed to synthesize waveform")?;
    println!(
        "duty_est={:.2}% ({} bytes)",
        duty_estimate(&bytes),
        bytes.len()
    );

    let mut chan =
        SerialChannel::open(devpath, baud).with_context(|| format!("Failed to open {devpath}"))?;
    transmit(&mut chan, policy, &bytes).context("Transmit rejected or failed")?;
    println!("Sent {} bytes to {devpath}", bytes.len());
    Ok(())
}
