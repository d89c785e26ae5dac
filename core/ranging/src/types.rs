use serde::Serialize;

/// Location and height of one channel's envelope maximum.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct PeakInfo {
    pub index: usize,
    pub value: f32,
}

/// Outcome of one complete measurement.
#[derive(Serialize, Debug)]
pub struct RangingReport {
    pub captured_bytes: usize,
    /// False when the capture ended on the idle timeout but still held
    /// enough samples to correlate.
    pub capture_complete: bool,
    pub left: PeakInfo,
    pub right: PeakInfo,
    pub range_m: f64,
    pub angle_rad: f64,
    pub angle_deg: f64,
    /// Per-channel envelopes, kept for dumping; omitted from JSON output.
    #[serde(skip)]
    pub env_left: Vec<f32>,
    #[serde(skip)]
    pub env_right: Vec<f32>,
}
