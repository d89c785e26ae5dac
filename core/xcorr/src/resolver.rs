//! Envelope peak to physical range and bearing.

/// Index of the maximum of `x` over `[i0, i1)`, smallest index on ties.
/// Bounds are clamped into the array; an empty array yields 0.
pub fn argmax_range(x: &[f32], i0: usize, i1: usize) -> usize {
    if x.is_empty() {
        return 0;
    }
    let n = x.len();
    let i0 = i0.min(n - 1);
    let i1 = i1.clamp(i0 + 1, n);

    let mut best_idx = i0;
    let mut best = x[i0];
    for (i, &v) in x.iter().enumerate().take(i1).skip(i0 + 1) {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}

/// Fixed physical parameters of the two-microphone rig.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub fs_hz: f64,
    pub mic_separation_m: f64,
    pub speed_of_sound_mps: f64,
}

/// One resolved echo.
#[derive(Debug, Clone, Copy)]
pub struct Fix {
    pub range_m: f64,
    /// Positive when the left channel's echo lags the right one, i.e. the
    /// target sits toward the right microphone.
    pub angle_rad: f64,
}

impl Geometry {
    /// Convert per-channel peak sample indices into range and bearing.
    pub fn resolve(&self, i_left: usize, i_right: usize) -> Fix {
        let t_left = i_left as f64 / self.fs_hz;
        let t_right = i_right as f64 / self.fs_hz;

        // Round trip per channel; average and halve for one-way range.
        let range_m = (t_left + t_right) * self.speed_of_sound_mps / 4.0;

        let sin_theta = ((t_left - t_right) * self.speed_of_sound_mps / self.mic_separation_m)
            .clamp(-1.0, 1.0);
        Fix {
            range_m,
            angle_rad: sin_theta.asin(),
        }
    }

    /// Sample-index window `[i0, i1)` covering round trips to targets
    /// between `d_min_m` and `d_max_m`.
    pub fn window_for_range(&self, d_min_m: f64, d_max_m: f64, n: usize) -> (usize, usize) {
        let to_index = |d: f64| (2.0 * d / self.speed_of_sound_mps * self.fs_hz).round() as usize;
        let i0 = to_index(d_min_m).min(n.saturating_sub(1));
        let i1 = to_index(d_max_m).min(n).max(i0 + 1);
        (i0, i1)
    }
}
