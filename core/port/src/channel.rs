use std::time::Duration;

use crate::error::Result;

/// A byte-oriented capability over one serial line.
///
/// `read` blocks for at most `timeout` and returns `Ok(0)` when nothing
/// arrived in time; actual line failures surface as errors. Implementations
/// own their descriptor and release it on drop.
pub trait ByteChannel: Send {
    /// Read up to `buf.len()` bytes, waiting at most `timeout` for the
    /// first byte. Returns the number of bytes read, 0 on timeout.
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Write as many bytes of `buf` as the line accepts. Returns the
    /// number of bytes written.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Discard anything already sitting in the receive buffer.
    fn flush_input(&mut self) -> Result<()>;

    /// The device path this channel was opened on.
    fn path(&self) -> &str;
}
