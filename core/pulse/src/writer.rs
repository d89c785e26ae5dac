use port::ByteChannel;

use crate::error::{PulseError, Result};
use crate::safety::{self, SafetyPolicy};

/// Stream a validated bitstream to the transmitter.
///
/// The safety gate is re-evaluated on every call; a short write counts as
/// failure.
pub fn transmit(chan: &mut dyn ByteChannel, policy: &SafetyPolicy, bytes: &[u8]) -> Result<()> {
    safety::check(policy, chan.path(), bytes)?;

    let written = chan.write(bytes)?;
    if written != bytes.len() {
        return Err(PulseError::ShortWrite {
            written,
            len: bytes.len(),
        });
    }
    log::debug!("transmitted {} bytes to {}", bytes.len(), chan.path());
    Ok(())
}
