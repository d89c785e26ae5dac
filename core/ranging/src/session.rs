//! The full ping: synthesize, arm, transmit, join, decode, correlate.

use std::time::Duration;

use adc::decode_stereo;
use port::{ByteChannel, SerialChannel};
use pulse::{SafetyPolicy, Waveform};
use xcorr::{Geometry, XcorrContext, argmax_range, reference_samples};

use crate::config::RangingConfig;
use crate::error::{RangingError, Result};
use crate::types::{PeakInfo, RangingReport};

/// A ready-to-fire rig: both data channels, the safety policy, and the
/// correlation context for the configured `(N, Fs, f_hpf)`.
pub struct RangingSession {
    cfg: RangingConfig,
    policy: SafetyPolicy,
    geometry: Geometry,
    ctx: XcorrContext,
    pulse_chan: Box<dyn ByteChannel>,
    /// Moves into the capture worker for the duration of each
    /// measurement; `None` only if a failed arm lost the channel.
    adc_chan: Option<Box<dyn ByteChannel>>,
}

impl RangingSession {
    /// Open the configured serial devices and build the session.
    pub fn open(cfg: RangingConfig) -> Result<Self> {
        let pulse_chan = SerialChannel::open(&cfg.pulse_path, cfg.baud)?;
        let adc_chan = SerialChannel::open(&cfg.adc_path, cfg.baud)?;
        Self::with_channels(cfg, Box::new(pulse_chan), Box::new(adc_chan))
    }

    /// Build the session over caller-supplied channels (virtual ports,
    /// test doubles).
    pub fn with_channels(
        cfg: RangingConfig,
        pulse_chan: Box<dyn ByteChannel>,
        adc_chan: Box<dyn ByteChannel>,
    ) -> Result<Self> {
        let ctx = XcorrContext::new(cfg.xcorr_n, cfg.fs_hz, cfg.hpf_hz)?;
        Ok(Self {
            policy: cfg.safety_policy(),
            geometry: cfg.geometry(),
            ctx,
            pulse_chan,
            adc_chan: Some(adc_chan),
            cfg,
        })
    }

    /// Emit `waveform` and resolve the echo into range and bearing.
    ///
    /// The capture worker is always joined, whatever the transmit path
    /// does; the ADC channel therefore survives every failure except a
    /// failed arm.
    pub fn measure(&mut self, waveform: &Waveform) -> Result<RangingReport> {
        let bitstream = pulse::synthesize(waveform)?;

        let (f_start, f_end) = waveform.sweep_hz();
        let reference = reference_samples(
            f_start,
            f_end,
            waveform.duration_s(),
            self.cfg.xcorr_n,
            self.cfg.fs_hz,
        )?;
        self.ctx.set_reference(&reference)?;

        let adc_chan = self.adc_chan.take().ok_or(RangingError::ChannelLost)?;
        let armed = adc::arm(
            adc_chan,
            self.cfg.adc_read_bytes,
            Duration::from_millis(self.cfg.adc_start_timeout_ms),
            Duration::from_millis(self.cfg.adc_idle_timeout_ms),
        )?;

        let sent = pulse::transmit(self.pulse_chan.as_mut(), &self.policy, &bitstream);

        let (adc_chan, outcome) = armed.join();
        self.adc_chan = Some(adc_chan);
        log::debug!("capture joined");

        sent?;
        let outcome = outcome?;

        let capture_complete = outcome.is_complete();
        let raw = outcome.into_bytes();
        let need = 4 * self.cfg.xcorr_n;
        if raw.len() < need {
            return Err(RangingError::ShortCapture {
                got: raw.len(),
                need,
            });
        }

        let (left, right) = decode_stereo(&raw, self.cfg.xcorr_n);
        let (i0, i1) =
            self.geometry
                .window_for_range(self.cfg.range_min_m, self.cfg.range_max_m, self.cfg.xcorr_n);

        let mut env_left = vec![0.0f32; self.cfg.xcorr_n];
        self.ctx.run_envelope(&left, &mut env_left)?;
        let left_peak = argmax_range(&env_left, i0, i1);

        let mut env_right = vec![0.0f32; self.cfg.xcorr_n];
        self.ctx.run_envelope(&right, &mut env_right)?;
        let right_peak = argmax_range(&env_right, i0, i1);

        let fix = self.geometry.resolve(left_peak, right_peak);
        Ok(RangingReport {
            captured_bytes: raw.len(),
            capture_complete,
            left: PeakInfo {
                index: left_peak,
                value: env_left[left_peak],
            },
            right: PeakInfo {
                index: right_peak,
                value: env_right[right_peak],
            },
            range_m: fix.range_m,
            angle_rad: fix.angle_rad,
            angle_deg: fix.angle_rad.to_degrees(),
            env_left,
            env_right,
        })
    }
}
