use std::io::{Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::channel::ByteChannel;
use crate::error::{PortError, Result};

/// Baud rates the attached hardware actually runs at.
const SUPPORTED_BAUDS: [u32; 2] = [115_200, 9_600];

/// A `ByteChannel` over a raw 8N1 serial line.
pub struct SerialChannel {
    inner: Box<dyn SerialPort>,
    path: String,
}

impl SerialChannel {
    /// Open `path` at `baud` in raw mode: 8 data bits, 1 stop bit, no
    /// parity, no flow control.
    pub fn open(path: &str, baud: u32) -> Result<Self> {
        if !SUPPORTED_BAUDS.contains(&baud) {
            return Err(PortError::UnsupportedBaud(baud));
        }

        let inner = serialport::new(path, baud)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(100))
            .open()
            .map_err(|source| PortError::Open {
                path: path.to_string(),
                source,
            })?;

        Ok(Self {
            inner,
            path: path.to_string(),
        })
    }
}

impl ByteChannel for SerialChannel {
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        self.inner.set_timeout(timeout)?;
        match self.inner.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = self.inner.write(buf)?;
        self.inner.flush()?;
        Ok(n)
    }

    fn flush_input(&mut self) -> Result<()> {
        self.inner.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn path(&self) -> &str {
        &self.path
    }
}
