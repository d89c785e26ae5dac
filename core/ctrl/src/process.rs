use anyhow::{Context, Result};

use port::SerialChannel;

use crate::dialog::CtrlDialog;

fn open_dialog(devpath: &str, baud: u32) -> Result<CtrlDialog> {
    let chan =
        SerialChannel::open(devpath, baud).with_context(|| format!("Failed to open {devpath}"))?;
    Ok(CtrlDialog::new(Box::new(chan)))
}

/// ENQ/ACK round trip.
pub fn ctrl_ping(devpath: &str, baud: u32) -> Result<()> {
    let mut dialog = open_dialog(devpath, baud)?;
    dialog.enq().context("ENQ/ACK failed")?;
    println!("ENQ/ACK OK");
    Ok(())
}

/// Print the sampling rate, or set it first when `set_hz` is given.
pub fn ctrl_rate(devpath: &str, baud: u32, set_hz: Option<u32>) -> Result<()> {
    let mut dialog = open_dialog(devpath, baud)?;
    if let Some(hz) = set_hz {
        dialog
            .set_sampling_hz(hz)
            .context("Failed to set sampling rate")?;
        println!("Requested sampling rate {hz} Hz");
    }
    let hz = dialog
        .sampling_hz()
        .context("Failed to query sampling rate")?;
    println!("sampling hz = {hz}");
    Ok(())
}

pub fn ctrl_gain(devpath: &str, baud: u32, gain: u32) -> Result<()> {
    let mut dialog = open_dialog(devpath, baud)?;
    dialog.set_gain(gain).context("Failed to set gain")?;
    println!("gain = {gain}");
    Ok(())
}

pub fn ctrl_errors(devpath: &str, baud: u32) -> Result<()> {
    let mut dialog = open_dialog(devpath, baud)?;
    let (pulse_err, adc_err) = dialog
        .error_counts()
        .context("Failed to read error counters")?;
    println!("pulse_err={pulse_err} adc_err={adc_err}");
    Ok(())
}
