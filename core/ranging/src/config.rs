use serde::{Deserialize, Serialize};

use pulse::SafetyPolicy;
use xcorr::Geometry;

/// Everything one deployment of the rig needs, in one record.
///
/// Defaults describe the reference bench: three virtual socat ports, a
/// 1 MHz stereo ADC behind a 115200 baud link, and the 0.116 m microphone
/// bar.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RangingConfig {
    pub adc_path: String,
    pub pulse_path: String,
    pub ctrl_path: String,
    pub baud: u32,

    /// Capture size in bytes; 256000 is 64 ms at 1 MHz, 4 bytes/sample.
    pub adc_read_bytes: usize,
    pub adc_start_timeout_ms: u64,
    pub adc_idle_timeout_ms: u64,

    pub bit_clock_hz: u32,
    pub fs_hz: f64,
    pub mic_separation_m: f64,
    pub speed_of_sound_mps: f64,

    pub xcorr_n: usize,
    pub hpf_hz: f64,
    pub range_min_m: f64,
    pub range_max_m: f64,

    pub duty_max_percent: u32,
    pub max_run_bits: usize,
    pub max_tx_bytes: usize,
    pub allowed_tx_paths: Vec<String>,
    pub test_tx_prefix: String,
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            adc_path: "/tmp/ADC_A".to_string(),
            pulse_path: "/tmp/PULSE_A".to_string(),
            ctrl_path: "/tmp/CTRL_A".to_string(),
            baud: 115_200,
            adc_read_bytes: 256_000,
            adc_start_timeout_ms: 500,
            adc_idle_timeout_ms: 2_000,
            bit_clock_hz: pulse::BIT_CLOCK_HZ,
            fs_hz: 1_000_000.0,
            mic_separation_m: 0.116,
            speed_of_sound_mps: 340.0,
            xcorr_n: 32_768,
            hpf_hz: 35_000.0,
            range_min_m: 0.1,
            range_max_m: 2.0,
            duty_max_percent: 60,
            max_run_bits: 200,
            max_tx_bytes: 50_000,
            allowed_tx_paths: Vec::new(),
            test_tx_prefix: "/tmp/PULSE_".to_string(),
        }
    }
}

impl RangingConfig {
    pub fn safety_policy(&self) -> SafetyPolicy {
        SafetyPolicy {
            max_tx_bytes: self.max_tx_bytes,
            duty_max_percent: self.duty_max_percent,
            max_run_bits: self.max_run_bits,
            allowed_tx_paths: self.allowed_tx_paths.clone(),
            test_tx_prefix: self.test_tx_prefix.clone(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            fs_hz: self.fs_hz,
            mic_separation_m: self.mic_separation_m,
            speed_of_sound_mps: self.speed_of_sound_mps,
        }
    }
}
