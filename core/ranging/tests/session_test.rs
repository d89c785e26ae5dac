use port::MemChannel;
use pulse::Waveform;
use ranging::{RangingConfig, RangingError, RangingSession};
use xcorr::reference_samples;

const N: usize = 32_768;
const FS: f64 = 1_000_000.0;

fn bench_waveform() -> Waveform {
    Waveform::Fm {
        f_start_hz: 95_000.0,
        f_end_hz: 50_000.0,
        duration_s: 0.008,
        duty_percent: 50,
    }
}

fn test_config(adc_read_bytes: usize) -> RangingConfig {
    RangingConfig {
        adc_read_bytes,
        ..RangingConfig::default()
    }
}

/// Interleave two float channels as big-endian i16 pairs, the ADC wire
/// format.
fn encode_stereo(left: &[f32], right: &[f32]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(4 * left.len());
    for (&l, &r) in left.iter().zip(right) {
        raw.extend_from_slice(&((l * 32000.0) as i16).to_be_bytes());
        raw.extend_from_slice(&((r * 32000.0) as i16).to_be_bytes());
    }
    raw
}

fn echo_capture(shift_left: usize, shift_right: usize) -> Vec<u8> {
    let reference = reference_samples(95_000.0, 50_000.0, 0.008, N, FS).unwrap();
    let mut left = vec![0.0f32; N];
    let mut right = vec![0.0f32; N];
    for i in 0..N {
        left[(i + shift_left) % N] = reference[i];
        right[(i + shift_right) % N] = reference[i];
    }
    encode_stereo(&left, &right)
}

#[test]
fn test_measure_resolves_synthetic_echo() {
    let raw = echo_capture(3000, 3200);

    let mut adc_chan = MemChannel::new("/tmp/ADC_A");
    adc_chan.push(10, &raw);
    let pulse_chan = MemChannel::new("/tmp/PULSE_A");

    let cfg = test_config(raw.len());
    let mut session =
        RangingSession::with_channels(cfg, Box::new(pulse_chan), Box::new(adc_chan)).unwrap();
    let report = session.measure(&bench_waveform()).unwrap();

    assert!(report.capture_complete);
    assert_eq!(report.captured_bytes, 4 * N);
    assert_eq!(report.left.index, 3000);
    assert_eq!(report.right.index, 3200);
    assert!((report.range_m - 0.527).abs() < 1e-3);
    assert!((report.angle_deg + 35.9).abs() < 0.1);
}

#[test]
fn test_measure_accepts_sufficient_partial_capture() {
    let raw = echo_capture(3000, 3200);

    // The line dies after 4*N bytes of a larger request.
    let mut adc_chan = MemChannel::new("/tmp/ADC_A");
    adc_chan.push(10, &raw);
    let pulse_chan = MemChannel::new("/tmp/PULSE_A");

    let cfg = test_config(256_000);
    let mut session =
        RangingSession::with_channels(cfg, Box::new(pulse_chan), Box::new(adc_chan)).unwrap();
    let report = session.measure(&bench_waveform()).unwrap();

    assert!(!report.capture_complete);
    assert_eq!(report.captured_bytes, 4 * N);
    assert_eq!(report.left.index, 3000);
}

#[test]
fn test_measure_rejects_short_capture() {
    let mut adc_chan = MemChannel::new("/tmp/ADC_A");
    adc_chan.push(10, &[0u8; 1000]);
    let pulse_chan = MemChannel::new("/tmp/PULSE_A");

    let cfg = test_config(256_000);
    let mut session =
        RangingSession::with_channels(cfg, Box::new(pulse_chan), Box::new(adc_chan)).unwrap();
    let err = session.measure(&bench_waveform()).unwrap_err();
    assert!(matches!(
        err,
        RangingError::ShortCapture { got: 1000, .. }
    ));
}

#[test]
fn test_transmit_failure_still_joins_capture() {
    let raw = echo_capture(3000, 3200);
    let mut adc_chan = MemChannel::new("/tmp/ADC_A");
    adc_chan.push(10, &raw);
    // A destination the safety gate will refuse.
    let pulse_chan = MemChannel::new("/dev/ttyUSB9");

    let cfg = test_config(raw.len());
    let mut session =
        RangingSession::with_channels(cfg, Box::new(pulse_chan), Box::new(adc_chan)).unwrap();

    let err = session.measure(&bench_waveform()).unwrap_err();
    assert!(matches!(
        err,
        RangingError::Pulse(pulse::PulseError::Destination { .. })
    ));

    // The worker was joined and the channel handed back: a second attempt
    // fails on the same gate, not on a lost channel.
    let err = session.measure(&bench_waveform()).unwrap_err();
    assert!(matches!(
        err,
        RangingError::Pulse(pulse::PulseError::Destination { .. })
    ));
}
