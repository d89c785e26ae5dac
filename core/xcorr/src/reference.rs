use std::f64::consts::TAU;

use crate::error::{Result, XcorrError};

/// Generate `n` samples at `fs_hz` of the continuous-time emission: a
/// unit-amplitude sine sweeping exponentially from `f_start_hz` to
/// `f_end_hz` over `duration_s`, zero afterwards.
///
/// The receiver hears the band-limited acoustic output, so the matched
/// filter correlates against this sine rather than the square-wave PWM
/// surrogate that actually drives the transmitter. Equal sweep endpoints
/// degenerate to a fixed-frequency tone.
pub fn reference_samples(
    f_start_hz: f64,
    f_end_hz: f64,
    duration_s: f64,
    n: usize,
    fs_hz: f64,
) -> Result<Vec<f32>> {
    if !(f_start_hz > 0.0) || !(f_end_hz > 0.0) {
        return Err(XcorrError::BadReference(format!(
            "sweep {f_start_hz} Hz -> {f_end_hz} Hz"
        )));
    }
    if !(duration_s > 0.0) {
        return Err(XcorrError::BadReference(format!(
            "duration {duration_s} s"
        )));
    }
    if !(fs_hz > 0.0) {
        return Err(XcorrError::InvalidRate(fs_hz));
    }

    let ratio = f_end_hz / f_start_hz;
    let degenerate = (ratio - 1.0).abs() < 1e-12;
    let scale = if degenerate {
        0.0
    } else {
        f_start_hz * duration_s / ratio.ln()
    };

    let mut out = vec![0.0f32; n];
    for (i, sample) in out.iter_mut().enumerate() {
        let t = i as f64 / fs_hz;
        if t >= duration_s {
            break;
        }
        let phase = if degenerate {
            TAU * f_start_hz * t
        } else {
            TAU * scale * (ratio.powf(t / duration_s) - 1.0)
        };
        *sample = phase.sin() as f32;
    }
    Ok(out)
}
