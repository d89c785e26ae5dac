//! Matched filter and analytic envelope in the frequency domain.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::{Result, XcorrError};

/// Precomputed transforms, reference spectrum and scratch for one
/// `(N, Fs, f_hpf)` triple. Not thread-safe; one correlation at a time.
pub struct XcorrContext {
    n: usize,
    hpf_bin: usize,
    fwd: Arc<dyn Fft<f32>>,
    inv: Arc<dyn Fft<f32>>,
    /// Frequency-domain reference R[k]; silence until `set_reference`.
    reference: Vec<Complex<f32>>,
    rec: Vec<Complex<f32>>,
    mix: Vec<Complex<f32>>,
    hil: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
}

impl XcorrContext {
    /// Plan the four transforms and allocate scratch. `hpf_hz` maps to
    /// `hpf_bin = ceil(hpf_hz * n / fs_hz)`, clamped to `0..=n/2`.
    pub fn new(n: usize, fs_hz: f64, hpf_hz: f64) -> Result<Self> {
        if n == 0 {
            return Err(XcorrError::InvalidLength(n));
        }
        if !(fs_hz > 0.0) {
            return Err(XcorrError::InvalidRate(fs_hz));
        }

        let hpf_bin = ((hpf_hz * n as f64 / fs_hz).ceil().max(0.0) as usize).min(n / 2);

        let mut planner = FftPlanner::new();
        let fwd = planner.plan_fft_forward(n);
        let inv = planner.plan_fft_inverse(n);
        let scratch_len = fwd
            .get_inplace_scratch_len()
            .max(inv.get_inplace_scratch_len());

        Ok(Self {
            n,
            hpf_bin,
            fwd,
            inv,
            reference: vec![Complex::new(0.0, 0.0); n],
            rec: vec![Complex::new(0.0, 0.0); n],
            mix: vec![Complex::new(0.0, 0.0); n],
            hil: vec![Complex::new(0.0, 0.0); n],
            scratch: vec![Complex::new(0.0, 0.0); scratch_len],
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn hpf_bin(&self) -> usize {
        self.hpf_bin
    }

    /// Replace the stored reference spectrum with the FFT of `ref_time`.
    pub fn set_reference(&mut self, ref_time: &[f32]) -> Result<()> {
        if ref_time.len() != self.n {
            return Err(XcorrError::LengthMismatch {
                got: ref_time.len(),
                need: self.n,
            });
        }

        for (slot, &x) in self.reference.iter_mut().zip(ref_time) {
            *slot = Complex::new(x, 0.0);
        }
        self.fwd
            .process_with_scratch(&mut self.reference, &mut self.scratch);
        Ok(())
    }

    /// Compute the cross-correlation envelope of `rec_time` against the
    /// stored reference.
    ///
    /// Pipeline per bin: symmetric low-frequency reject (which keeps the
    /// Hermitian symmetry of the real input intact), conjugate-reference
    /// multiply, and a Hilbert pair built by rotating the matched spectrum
    /// by -j on positive frequencies and +j on negative ones. Two inverse
    /// transforms yield I and Q; both are unnormalised, so 1/N is applied
    /// once at magnitude extraction.
    pub fn run_envelope(&mut self, rec_time: &[f32], env_out: &mut [f32]) -> Result<()> {
        if rec_time.len() != self.n {
            return Err(XcorrError::LengthMismatch {
                got: rec_time.len(),
                need: self.n,
            });
        }
        if env_out.len() != self.n {
            return Err(XcorrError::LengthMismatch {
                got: env_out.len(),
                need: self.n,
            });
        }

        for (slot, &x) in self.rec.iter_mut().zip(rec_time) {
            *slot = Complex::new(x, 0.0);
        }
        self.fwd.process_with_scratch(&mut self.rec, &mut self.scratch);

        let n = self.n;
        let h = self.hpf_bin;
        let half = n / 2;
        for k in 0..n {
            let pass = k >= h && k <= n - h;
            let y = if pass {
                self.rec[k]
            } else {
                Complex::new(0.0, 0.0)
            };
            let m = self.reference[k].conj() * y;
            self.mix[k] = m;
            self.hil[k] = if k <= half {
                Complex::new(m.im, -m.re)
            } else {
                Complex::new(-m.im, m.re)
            };
        }

        self.inv.process_with_scratch(&mut self.mix, &mut self.scratch);
        self.inv.process_with_scratch(&mut self.hil, &mut self.scratch);

        let inv_n = 1.0 / n as f32;
        for i in 0..n {
            let re = self.mix[i].re * inv_n;
            let im = self.hil[i].re * inv_n;
            env_out[i] = (re * re + im * im).sqrt();
        }
        Ok(())
    }
}
