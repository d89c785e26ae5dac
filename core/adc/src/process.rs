use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use port::{ByteChannel, SerialChannel};

use crate::capture::{CaptureOutcome, read_exact};
use crate::decode::decode_stereo;

/// One-shot capture to a raw binary file, no transmit involved.
pub fn adc_capture(
    devpath: &str,
    baud: u32,
    want: usize,
    start_timeout_ms: u64,
    idle_timeout_ms: u64,
    output: &Path,
) -> Result<()> {
    let mut chan =
        SerialChannel::open(devpath, baud).with_context(|| format!("Failed to open {devpath}"))?;
    chan.flush_input().context("Failed to flush ADC input")?;

    let outcome = read_exact(
        &mut chan,
        want,
        Duration::from_millis(start_timeout_ms),
        Duration::from_millis(idle_timeout_ms),
    )
    .context("Capture failed")?;

    match &outcome {
        CaptureOutcome::Complete(b) => println!("Captured {} bytes", b.len()),
        CaptureOutcome::Partial(b) => println!("Partial capture: {} of {want} bytes", b.len()),
    }

    fs::write(output, outcome.bytes()).context("Failed to write capture file")?;
    println!("Wrote raw capture to {:?}", output);
    Ok(())
}

/// Decode a raw capture file into a two-column text file of normalised
/// left/right samples.
pub fn adc_dump_channels(input: &Path, output: &Path) -> Result<()> {
    let raw = fs::read(input).context("Failed to read capture file")?;
    let n_samples = raw.len() / 4;
    let (left, right) = decode_stereo(&raw, n_samples);

    let mut text = String::new();
    for i in 0..n_samples {
        writeln!(text, "{} {}", left[i], right[i]).unwrap();
    }
    fs::write(output, text).context("Failed to write channel dump")?;
    println!("Decoded {n_samples} samples to {:?}", output);
    Ok(())
}
