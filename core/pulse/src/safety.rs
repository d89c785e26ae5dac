//! Last line of defence before bytes reach the transmitter.
//!
//! Every check runs on every transmit call; nothing is cached between
//! calls.

use serde::{Deserialize, Serialize};

use crate::bits::{count_ones, longest_run};
use crate::error::{PulseError, Result};

/// Caps and destination rules the gate enforces.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SafetyPolicy {
    /// Hard limit on bitstream length.
    pub max_tx_bytes: usize,
    /// Ones-ratio cap in percent; reaching it rejects.
    pub duty_max_percent: u32,
    /// Cap on consecutive 1-bits; reaching it rejects.
    pub max_run_bits: usize,
    /// Exact-match allow-list for live hardware paths.
    pub allowed_tx_paths: Vec<String>,
    /// Prefix under which virtual test ports are always permitted.
    pub test_tx_prefix: String,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            max_tx_bytes: 50_000,
            duty_max_percent: 60,
            max_run_bits: 200,
            allowed_tx_paths: Vec::new(),
            test_tx_prefix: "/tmp/PULSE_".to_string(),
        }
    }
}

impl SafetyPolicy {
    pub fn destination_allowed(&self, path: &str) -> bool {
        path.starts_with(&self.test_tx_prefix)
            || self.allowed_tx_paths.iter().any(|p| p == path)
    }
}

/// Check `bytes` bound for `dest_path` against `policy`. Rejections log
/// the offending measurement and return the matching error.
pub fn check(policy: &SafetyPolicy, dest_path: &str, bytes: &[u8]) -> Result<()> {
    if !policy.destination_allowed(dest_path) {
        log::warn!("safety: destination {dest_path} not in allow-list");
        return Err(PulseError::Destination {
            path: dest_path.to_string(),
        });
    }

    if bytes.is_empty() {
        return Err(PulseError::EmptyBuffer);
    }

    if bytes.len() > policy.max_tx_bytes {
        log::warn!(
            "safety: {} bytes exceeds limit of {}",
            bytes.len(),
            policy.max_tx_bytes
        );
        return Err(PulseError::Length {
            len: bytes.len(),
            max: policy.max_tx_bytes,
        });
    }

    let bits = (bytes.len() as u64) * 8;
    let ones = count_ones(bytes);
    if ones * 100 >= bits * policy.duty_max_percent as u64 {
        let measured = 100.0 * ones as f64 / bits as f64;
        log::warn!(
            "safety: duty {measured:.2}% reaches cap of {}%",
            policy.duty_max_percent
        );
        return Err(PulseError::Duty {
            measured,
            max: policy.duty_max_percent,
        });
    }

    let run = longest_run(bytes);
    if run >= policy.max_run_bits {
        log::warn!(
            "safety: run of {run} high bits reaches cap of {}",
            policy.max_run_bits
        );
        return Err(PulseError::RunLength {
            run,
            max: policy.max_run_bits,
        });
    }

    Ok(())
}
