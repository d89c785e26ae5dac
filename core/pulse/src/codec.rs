//! Waveform-to-bitstream rendering at the 10 MHz tick.

use crate::bits::set_bit;
use crate::error::{PulseError, Result};
use crate::types::{BIT_CLOCK_HZ, Waveform};

/// Render `waveform` into a freshly allocated LSB-first bitstream.
pub fn synthesize(waveform: &Waveform) -> Result<Vec<u8>> {
    match *waveform {
        Waveform::Cf {
            freq_khz,
            duty_percent,
            byte_length,
        } => {
            let mut out = vec![0u8; byte_length];
            gen_cf(&mut out, freq_khz, duty_percent)?;
            Ok(out)
        }
        Waveform::Fm {
            f_start_hz,
            f_end_hz,
            duration_s,
            duty_percent,
        } => {
            if !(duration_s > 0.0) {
                return Err(PulseError::BadChirp(format!("duration {duration_s} s")));
            }
            let ticks = (duration_s * BIT_CLOCK_HZ as f64).round() as usize;
            let mut out = vec![0u8; ticks.div_ceil(8)];
            gen_fm(&mut out, f_start_hz, f_end_hz, duration_s, duty_percent)?;
            Ok(out)
        }
    }
}

/// Fill `out` with a constant-frequency square wave.
///
/// Period in ticks is `round(10000 / freq_khz)`; on-ticks are
/// `round(period * duty / 100)`, clamped to `1..period` so a non-zero duty
/// never degenerates to flat-high or flat-low. Duty 0 yields all zeros.
pub fn gen_cf(out: &mut [u8], freq_khz: u32, duty_percent: u32) -> Result<()> {
    if out.is_empty() {
        return Err(PulseError::EmptyBuffer);
    }
    if !(1..=5000).contains(&freq_khz) {
        return Err(PulseError::FreqOutOfRange(freq_khz));
    }
    if duty_percent > 99 {
        return Err(PulseError::DutyOutOfRange(duty_percent));
    }

    out.fill(0);
    if duty_percent == 0 {
        return Ok(());
    }

    // 10 MHz raster: one period is 10000/freq_khz ticks, rounded.
    // freq_khz <= 5000 guarantees at least 2 ticks per period.
    let period_ticks = ((10_000 + freq_khz / 2) / freq_khz) as usize;
    let on_ticks =
        ((period_ticks * duty_percent as usize + 50) / 100).clamp(1, period_ticks - 1);

    for bit in 0..out.len() * 8 {
        if bit % period_ticks < on_ticks {
            set_bit(out, bit);
        }
    }
    Ok(())
}

/// Fill `out` with an exponential chirp from `f_start_hz` to `f_end_hz`
/// over `duration_s`. Ticks beyond the duration stay zero.
///
/// Duty is realised by thresholding the fractional part of the
/// instantaneous cycle count: tick `n` is high iff
/// `frac(phi(n) / 2pi) < duty / 100`, which keeps the long-run ones-ratio
/// at the requested duty independent of the sweep.
pub fn gen_fm(
    out: &mut [u8],
    f_start_hz: f64,
    f_end_hz: f64,
    duration_s: f64,
    duty_percent: u32,
) -> Result<()> {
    if out.is_empty() {
        return Err(PulseError::EmptyBuffer);
    }
    if duty_percent > 99 {
        return Err(PulseError::DutyOutOfRange(duty_percent));
    }
    if !(f_start_hz > 0.0) || !(f_end_hz > 0.0) {
        return Err(PulseError::BadChirp(format!(
            "sweep {f_start_hz} Hz -> {f_end_hz} Hz"
        )));
    }
    if !(duration_s > 0.0) {
        return Err(PulseError::BadChirp(format!("duration {duration_s} s")));
    }

    out.fill(0);
    if duty_percent == 0 {
        return Ok(());
    }

    let ticks = ((duration_s * BIT_CLOCK_HZ as f64).round() as usize).min(out.len() * 8);
    let threshold = duty_percent as f64 / 100.0;
    let ratio = f_end_hz / f_start_hz;
    let degenerate = (ratio - 1.0).abs() < 1e-12;
    let scale = if degenerate {
        0.0
    } else {
        f_start_hz * duration_s / ratio.ln()
    };

    for bit in 0..ticks {
        let t = bit as f64 / BIT_CLOCK_HZ as f64;
        // Cycle count phi(t) / 2pi of the ideal carrier.
        let cycles = if degenerate {
            f_start_hz * t
        } else {
            scale * (ratio.powf(t / duration_s) - 1.0)
        };
        if cycles.fract() < threshold {
            set_bit(out, bit);
        }
    }
    Ok(())
}
