use std::time::Duration;

use adc::{CaptureOutcome, arm, decode_stereo, read_exact};
use port::{ByteChannel, MemChannel};

const START: Duration = Duration::from_millis(500);
const IDLE: Duration = Duration::from_millis(2000);

#[test]
fn test_capture_complete_across_bursts() {
    let mut chan = MemChannel::new("/tmp/ADC_A");
    chan.push(0, &[0xAAu8; 100])
        .push(100, &[0xBBu8; 100])
        .push(1500, &[0xCCu8; 56]);

    let outcome = read_exact(&mut chan, 256, START, IDLE).unwrap();
    let CaptureOutcome::Complete(buf) = outcome else {
        panic!("expected complete capture");
    };
    assert_eq!(buf.len(), 256);
    assert_eq!(buf[0], 0xAA);
    assert_eq!(buf[100], 0xBB);
    assert_eq!(buf[255], 0xCC);
}

#[test]
fn test_capture_nothing_arrives() {
    let mut chan = MemChannel::new("/tmp/ADC_A");
    let outcome = read_exact(&mut chan, 256_000, START, IDLE).unwrap();
    let CaptureOutcome::Partial(buf) = outcome else {
        panic!("expected partial capture");
    };
    assert!(buf.is_empty());
}

#[test]
fn test_capture_partial_after_idle_gap() {
    // 12000 bytes arrive, then the line falls silent for longer than the
    // idle budget.
    let mut chan = MemChannel::new("/tmp/ADC_A");
    chan.push(0, &vec![0x55u8; 12_000]).push(5000, &[0x66u8; 16]);

    let outcome = read_exact(&mut chan, 256_000, START, IDLE).unwrap();
    let CaptureOutcome::Partial(buf) = outcome else {
        panic!("expected partial capture");
    };
    assert_eq!(buf.len(), 12_000);
    assert!(buf.iter().all(|&b| b == 0x55));
}

#[test]
fn test_arm_flushes_stale_input() {
    let mut chan = MemChannel::new("/tmp/ADC_A");
    chan.push(0, b"garbage").push(10, &[0x11u8; 32]);

    let armed = arm(Box::new(chan), 32, START, IDLE).unwrap();
    let (_chan, outcome) = armed.join();
    let buf = outcome.unwrap().into_bytes();
    assert_eq!(buf, vec![0x11u8; 32]);
}

#[test]
fn test_join_returns_channel_after_partial() {
    let mut chan = MemChannel::new("/tmp/ADC_A");
    chan.push(0, &[0x22u8; 10]);

    let armed = arm(Box::new(chan), 100, START, IDLE).unwrap();
    let (chan, outcome) = armed.join();
    assert_eq!(chan.path(), "/tmp/ADC_A");

    let CaptureOutcome::Partial(buf) = outcome.unwrap() else {
        panic!("expected partial capture");
    };
    assert_eq!(buf.len(), 10);
}

#[test]
fn test_decode_known_samples() {
    // [L=0x7FFF, R=0x8000], [L=0x0000, R=0x4000]
    let raw = [0x7F, 0xFF, 0x80, 0x00, 0x00, 0x00, 0x40, 0x00];
    let (left, right) = decode_stereo(&raw, 2);

    assert!((left[0] - 32767.0 / 32768.0).abs() < 1e-6);
    assert_eq!(right[0], -1.0);
    assert_eq!(left[1], 0.0);
    assert_eq!(right[1], 0.5);
}

#[test]
fn test_decode_short_buffer_is_silence() {
    let raw = [0x7F, 0xFF, 0x80];
    let (left, right) = decode_stereo(&raw, 4);
    assert_eq!(left, vec![0.0; 4]);
    assert_eq!(right, vec![0.0; 4]);
}
