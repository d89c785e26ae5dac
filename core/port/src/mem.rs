use std::collections::VecDeque;
use std::time::Duration;

use crate::channel::ByteChannel;
use crate::error::{PortError, Result};

struct Chunk {
    /// Virtual silence before this chunk becomes readable.
    delay: Duration,
    data: Vec<u8>,
}

/// A scripted in-memory channel for exercising capture and dialog code
/// without hardware.
///
/// The read side is a queue of timed chunks: a chunk with a non-zero delay
/// consumes read timeouts (returning 0) until the scripted silence has
/// elapsed in virtual time, then delivers its bytes. The write side records
/// everything written.
pub struct MemChannel {
    path: String,
    script: VecDeque<Chunk>,
    written: Vec<u8>,
    write_cap: Option<usize>,
    fail_writes: bool,
}

impl MemChannel {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            script: VecDeque::new(),
            written: Vec::new(),
            write_cap: None,
            fail_writes: false,
        }
    }

    /// Queue `data` to arrive after `delay_ms` of line silence.
    pub fn push(&mut self, delay_ms: u64, data: &[u8]) -> &mut Self {
        self.script.push_back(Chunk {
            delay: Duration::from_millis(delay_ms),
            data: data.to_vec(),
        });
        self
    }

    /// Everything written to the channel so far.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Accept at most `cap` bytes per write call (short-write simulation).
    pub fn set_write_cap(&mut self, cap: usize) {
        self.write_cap = Some(cap);
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&mut self) {
        self.fail_writes = true;
    }
}

impl ByteChannel for MemChannel {
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let Some(chunk) = self.script.front_mut() else {
            return Ok(0);
        };

        if chunk.delay > timeout {
            chunk.delay -= timeout;
            return Ok(0);
        }
        chunk.delay = Duration::ZERO;

        let n = chunk.data.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk.data[..n]);
        chunk.data.drain(..n);
        if chunk.data.is_empty() {
            self.script.pop_front();
        }
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(PortError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "scripted write failure",
            )));
        }
        let n = match self.write_cap {
            Some(cap) => buf.len().min(cap),
            None => buf.len(),
        };
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush_input(&mut self) -> Result<()> {
        // Only data already sitting in the buffer is discarded; scripted
        // future chunks stay queued.
        while let Some(chunk) = self.script.front() {
            if chunk.delay.is_zero() {
                self.script.pop_front();
            } else {
                break;
            }
        }
        Ok(())
    }

    fn path(&self) -> &str {
        &self.path
    }
}
