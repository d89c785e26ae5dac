use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use pulse::Waveform;

use crate::config::RangingConfig;
use crate::session::RangingSession;

/// Write the default configuration as pretty JSON.
pub fn config_init(output: &Path) -> Result<()> {
    let cfg = RangingConfig::default();
    fs::write(
        output,
        serde_json::to_string_pretty(&cfg).context("Failed to serialize config")?,
    )
    .context("Failed to write config file")?;
    println!("Wrote default config to {:?}", output);
    Ok(())
}

/// Load a configuration file, or the defaults when no path is given.
pub fn config_load(path: Option<&Path>) -> Result<RangingConfig> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("Failed to read config {:?}", p))?;
            serde_json::from_str(&text).with_context(|| format!("Failed to parse config {:?}", p))
        }
        None => Ok(RangingConfig::default()),
    }
}

/// Run one measurement and print the report; optionally dump both
/// envelopes as `<prefix>_left.txt` / `<prefix>_right.txt`.
pub fn range_once(cfg: RangingConfig, waveform: &Waveform, env_prefix: Option<&Path>) -> Result<()> {
    let mut session = RangingSession::open(cfg).context("Failed to open ranging session")?;
    let report = session.measure(waveform).context("Measurement failed")?;

    println!(
        "captured {} bytes ({})",
        report.captured_bytes,
        if report.capture_complete {
            "complete"
        } else {
            "partial"
        }
    );
    println!(
        "left peak  @{} ({:.4})",
        report.left.index, report.left.value
    );
    println!(
        "right peak @{} ({:.4})",
        report.right.index, report.right.value
    );
    println!(
        "range = {:.3} m, bearing = {:.1} deg",
        report.range_m, report.angle_deg
    );

    if let Some(prefix) = env_prefix {
        dump_envelope(&report.env_left, prefix, "left")?;
        dump_envelope(&report.env_right, prefix, "right")?;
    }
    Ok(())
}

fn dump_envelope(env: &[f32], prefix: &Path, side: &str) -> Result<()> {
    let mut text = String::new();
    for v in env {
        writeln!(text, "{v}").unwrap();
    }
    let path = prefix.with_file_name(format!(
        "{}_{side}.txt",
        prefix
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "env".to_string())
    ));
    fs::write(&path, text).with_context(|| format!("Failed to write envelope {:?}", path))?;
    println!("Wrote envelope to {:?}", path);
    Ok(())
}
