use byteorder::{BigEndian, ByteOrder};

/// Decode `n_samples` interleaved big-endian i16 pairs into normalised
/// left/right channels.
///
/// Sample `i` occupies bytes `4i..4i+4` as `[LH, LL, RH, RL]`; values are
/// scaled by 1/32768. A buffer shorter than `4 * n_samples` decodes to
/// silence on both channels.
pub fn decode_stereo(raw: &[u8], n_samples: usize) -> (Vec<f32>, Vec<f32>) {
    let mut left = vec![0.0f32; n_samples];
    let mut right = vec![0.0f32; n_samples];

    if raw.len() < n_samples * 4 {
        return (left, right);
    }

    for i in 0..n_samples {
        let off = 4 * i;
        left[i] = BigEndian::read_i16(&raw[off..off + 2]) as f32 / 32768.0;
        right[i] = BigEndian::read_i16(&raw[off + 2..off + 4]) as f32 / 32768.0;
    }
    (left, right)
}
