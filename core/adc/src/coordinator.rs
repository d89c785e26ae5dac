//! Parallel capture armed ahead of a transmit.
//!
//! The channel moves into the worker and comes back through the join, so
//! the buffer and its channel have exactly one owner at every point.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use port::ByteChannel;

use crate::capture::{CaptureOutcome, read_exact};
use crate::error::Result;

/// A capture in flight. Dropping this without joining leaks the worker;
/// callers must `join` on every path, including transmit failures.
pub struct ArmedCapture {
    handle: JoinHandle<(Box<dyn ByteChannel>, Result<CaptureOutcome>)>,
}

/// Flush stale input and spawn the reader. Returns once the worker is
/// running; the caller is then free to fire the transmitter.
pub fn arm(
    mut chan: Box<dyn ByteChannel>,
    want: usize,
    start_timeout: Duration,
    idle_timeout: Duration,
) -> Result<ArmedCapture> {
    chan.flush_input()?;
    log::debug!("capture armed: {want} bytes from {}", chan.path());

    let handle = thread::spawn(move || {
        let outcome = read_exact(chan.as_mut(), want, start_timeout, idle_timeout);
        (chan, outcome)
    });

    Ok(ArmedCapture { handle })
}

impl ArmedCapture {
    /// Wait for the reader and take back the channel together with the
    /// capture outcome.
    pub fn join(self) -> (Box<dyn ByteChannel>, Result<CaptureOutcome>) {
        match self.handle.join() {
            Ok(pair) => pair,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}
