use std::time::Duration;

use port::ByteChannel;

use crate::error::Result;

/// What a capture attempt yielded. Partial results keep whatever arrived.
#[derive(Debug)]
pub enum CaptureOutcome {
    Complete(Vec<u8>),
    Partial(Vec<u8>),
}

impl CaptureOutcome {
    pub fn bytes(&self) -> &[u8] {
        match self {
            CaptureOutcome::Complete(b) | CaptureOutcome::Partial(b) => b,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CaptureOutcome::Complete(b) | CaptureOutcome::Partial(b) => b,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, CaptureOutcome::Complete(_))
    }
}

/// Read exactly `want` bytes with activity-based timeouts.
///
/// Waits up to `start_timeout` for the first byte, then up to
/// `idle_timeout` between deliveries. Silence past either budget ends the
/// capture with whatever was read; there is no bound on total duration as
/// long as bytes keep arriving.
pub fn read_exact(
    chan: &mut dyn ByteChannel,
    want: usize,
    start_timeout: Duration,
    idle_timeout: Duration,
) -> Result<CaptureOutcome> {
    let mut buf = vec![0u8; want];

    let n = chan.read(&mut buf, start_timeout)?;
    if n == 0 {
        buf.clear();
        return Ok(CaptureOutcome::Partial(buf));
    }

    let mut got = n;
    while got < want {
        let n = chan.read(&mut buf[got..], idle_timeout)?;
        if n == 0 {
            log::debug!("capture went idle after {got} of {want} bytes");
            buf.truncate(got);
            return Ok(CaptureOutcome::Partial(buf));
        }
        got += n;
    }

    Ok(CaptureOutcome::Complete(buf))
}
