//! Line-oriented command dialog with the controller board.
//!
//! The protocol is a single-byte ENQ/ACK handshake plus short ASCII
//! commands terminated by `\n`; replies end in `\r\n`.

use std::time::Duration;

use port::ByteChannel;

use crate::error::{CtrlError, Result};

const ENQ: u8 = 0x05;
const ACK: u8 = 0x06;

/// Reply budget for every query.
const REPLY_TIMEOUT: Duration = Duration::from_millis(500);

pub struct CtrlDialog {
    chan: Box<dyn ByteChannel>,
}

impl CtrlDialog {
    pub fn new(chan: Box<dyn ByteChannel>) -> Self {
        Self { chan }
    }

    pub fn into_channel(self) -> Box<dyn ByteChannel> {
        self.chan
    }

    /// Send ENQ and expect ACK back.
    pub fn enq(&mut self) -> Result<()> {
        self.chan.flush_input()?;
        self.chan.write(&[ENQ])?;

        let mut resp = [0u8; 1];
        let n = self.chan.read(&mut resp, REPLY_TIMEOUT)?;
        if n == 0 {
            return Err(CtrlError::Timeout);
        }
        if resp[0] != ACK {
            return Err(CtrlError::BadReply {
                reply: format!("{:#04x}", resp[0]),
            });
        }
        Ok(())
    }

    /// Query the ADC sampling rate (`f`).
    pub fn sampling_hz(&mut self) -> Result<u32> {
        let line = self.query("f\n")?;
        line.trim()
            .parse::<u32>()
            .ok()
            .filter(|&hz| hz > 0)
            .ok_or(CtrlError::BadReply { reply: line })
    }

    /// Set the ADC sampling rate (`f <hz>`).
    pub fn set_sampling_hz(&mut self, hz: u32) -> Result<()> {
        self.send_line(&format!("f {hz}\n"))
    }

    /// Set the amplifier gain (`g <gain>`).
    pub fn set_gain(&mut self, gain: u32) -> Result<()> {
        self.send_line(&format!("g {gain}\n"))
    }

    /// Read the board's error counters (`e`), reported as
    /// `"<pulse_err> <adc_err>"`.
    pub fn error_counts(&mut self) -> Result<(u32, u32)> {
        let line = self.query("e\n")?;
        let mut parts = line.split_whitespace();
        let parse = |s: Option<&str>| s.and_then(|v| v.parse::<u32>().ok());
        match (parse(parts.next()), parse(parts.next())) {
            (Some(pulse_err), Some(adc_err)) => Ok((pulse_err, adc_err)),
            _ => Err(CtrlError::BadReply { reply: line }),
        }
    }

    pub fn send_line(&mut self, line: &str) -> Result<()> {
        let written = self.chan.write(line.as_bytes())?;
        if written != line.len() {
            return Err(CtrlError::Port(port::PortError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "short write on control line",
            ))));
        }
        log::debug!("ctrl -> {}", line.trim_end());
        Ok(())
    }

    fn query(&mut self, cmd: &str) -> Result<String> {
        self.chan.flush_input()?;
        self.send_line(cmd)?;
        let line = self.read_line(REPLY_TIMEOUT)?;
        log::debug!("ctrl <- {}", line.trim_end());
        Ok(line)
    }

    /// Read one `\n`-terminated line, byte at a time with a per-byte
    /// timeout.
    fn read_line(&mut self, timeout: Duration) -> Result<String> {
        let mut line = Vec::new();
        loop {
            let mut byte = [0u8; 1];
            let n = self.chan.read(&mut byte, timeout)?;
            if n == 0 {
                if line.is_empty() {
                    return Err(CtrlError::Timeout);
                }
                break;
            }
            line.push(byte[0]);
            if byte[0] == b'\n' || line.len() >= 128 {
                break;
            }
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}
