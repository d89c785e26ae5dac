use serde::{Deserialize, Serialize};

/// Tick rate of the pulse transmitter. One bit of the bitstream is one
/// 0.1 µs tick.
pub const BIT_CLOCK_HZ: u32 = 10_000_000;

/// One emission, either a constant-frequency carrier or an exponential
/// frequency-modulated chirp.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Waveform {
    Cf {
        /// Carrier frequency, 1..=5000 kHz.
        freq_khz: u32,
        /// Ones-ratio target, 0..=99 percent.
        duty_percent: u32,
        /// Bitstream length in bytes.
        byte_length: usize,
    },
    Fm {
        f_start_hz: f64,
        f_end_hz: f64,
        duration_s: f64,
        duty_percent: u32,
    },
}

impl Waveform {
    /// Emission duration in seconds once rendered to the bitstream.
    pub fn duration_s(&self) -> f64 {
        match *self {
            Waveform::Cf { byte_length, .. } => {
                (byte_length as f64) * 8.0 / BIT_CLOCK_HZ as f64
            }
            Waveform::Fm { duration_s, .. } => duration_s,
        }
    }

    /// Frequency sweep `(start, end)` in Hz; both ends coincide for CF.
    pub fn sweep_hz(&self) -> (f64, f64) {
        match *self {
            Waveform::Cf { freq_khz, .. } => {
                let f = freq_khz as f64 * 1000.0;
                (f, f)
            }
            Waveform::Fm {
                f_start_hz,
                f_end_hz,
                ..
            } => (f_start_hz, f_end_hz),
        }
    }
}
