use port::MemChannel;
use pulse::bits::set_bit;
use pulse::safety::{SafetyPolicy, check};
use pulse::{PulseError, Waveform, synthesize, transmit};

fn policy() -> SafetyPolicy {
    SafetyPolicy::default()
}

#[test]
fn test_reject_unknown_destination() {
    let bytes = vec![0x01u8; 100];
    let err = check(&policy(), "/dev/ttyUSB0", &bytes).unwrap_err();
    assert!(matches!(err, PulseError::Destination { .. }));
}

#[test]
fn test_allow_listed_hardware_path() {
    let mut policy = policy();
    policy.allowed_tx_paths.push("/dev/ttyUSB0".to_string());
    let bytes = vec![0x01u8; 100];
    assert!(check(&policy, "/dev/ttyUSB0", &bytes).is_ok());
}

#[test]
fn test_reject_over_length() {
    let bytes = vec![0x00u8; 50_001];
    let err = check(&policy(), "/tmp/PULSE_A", &bytes).unwrap_err();
    assert!(matches!(
        err,
        PulseError::Length {
            len: 50_001,
            max: 50_000
        }
    ));
}

#[test]
fn test_reject_over_duty() {
    let bytes = vec![0xFFu8; 100];
    let err = check(&policy(), "/tmp/PULSE_A", &bytes).unwrap_err();
    assert!(matches!(err, PulseError::Duty { .. }));
}

#[test]
fn test_reject_long_run() {
    // 250 consecutive high ticks, padded with silence so only the run
    // check fires (the same run inside a short buffer would trip the duty
    // cap first).
    let mut bytes = vec![0u8; 400];
    for bit in 0..250 {
        set_bit(&mut bytes, bit);
    }
    let err = check(&policy(), "/tmp/PULSE_A", &bytes).unwrap_err();
    assert!(matches!(err, PulseError::RunLength { run: 250, max: 200 }));
}

#[test]
fn test_rejection_is_monotone_in_ones() {
    // Flipping any 0 to 1 in a rejected stream must keep it rejected.
    let mut bytes = vec![0u8; 400];
    for bit in 0..250 {
        set_bit(&mut bytes, bit);
    }
    assert!(check(&policy(), "/tmp/PULSE_A", &bytes).is_err());

    for extra in [250usize, 1000, 2500, 3199] {
        let mut flipped = bytes.clone();
        set_bit(&mut flipped, extra);
        assert!(
            check(&policy(), "/tmp/PULSE_A", &flipped).is_err(),
            "flipping bit {extra} un-rejected the stream"
        );
    }
}

#[test]
fn test_transmit_passes_gate_and_writes_all() {
    let wave = Waveform::Cf {
        freq_khz: 40,
        duty_percent: 10,
        byte_length: 1000,
    };
    let bytes = synthesize(&wave).unwrap();

    let mut chan = MemChannel::new("/tmp/PULSE_A");
    transmit(&mut chan, &policy(), &bytes).unwrap();
    assert_eq!(chan.written(), &bytes[..]);
}

#[test]
fn test_transmit_gate_runs_every_call() {
    let bytes = vec![0x01u8; 100];
    let mut good = MemChannel::new("/tmp/PULSE_A");
    transmit(&mut good, &policy(), &bytes).unwrap();

    // The same validated bitstream must still be rejected for a different
    // destination.
    let mut live = MemChannel::new("/dev/ttyUSB0");
    let err = transmit(&mut live, &policy(), &bytes).unwrap_err();
    assert!(matches!(err, PulseError::Destination { .. }));
    assert!(live.written().is_empty());
}

#[test]
fn test_transmit_short_write_is_failure() {
    let bytes = vec![0x01u8; 100];
    let mut chan = MemChannel::new("/tmp/PULSE_A");
    chan.set_write_cap(10);
    let err = transmit(&mut chan, &policy(), &bytes).unwrap_err();
    assert!(matches!(
        err,
        PulseError::ShortWrite {
            written: 10,
            len: 100
        }
    ));
}

#[test]
fn test_transmit_surfaces_io_failure() {
    let bytes = vec![0x01u8; 100];
    let mut chan = MemChannel::new("/tmp/PULSE_A");
    chan.set_fail_writes();
    let err = transmit(&mut chan, &policy(), &bytes).unwrap_err();
    assert!(matches!(err, PulseError::Port(_)));
}
