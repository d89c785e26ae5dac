use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("carrier frequency {0} kHz outside 1..=5000")]
    FreqOutOfRange(u32),
    #[error("duty {0}% outside 0..=99")]
    DutyOutOfRange(u32),
    #[error("chirp parameter out of range: {0}")]
    BadChirp(String),
    #[error("empty output buffer")]
    EmptyBuffer,
    #[error("transmit blocked: destination {path} is not allowed")]
    Destination { path: String },
    #[error("transmit blocked: {len} bytes exceeds limit of {max}")]
    Length { len: usize, max: usize },
    #[error("transmit blocked: duty {measured:.2}% reaches cap of {max}%")]
    Duty { measured: f64, max: u32 },
    #[error("transmit blocked: run of {run} high bits reaches cap of {max}")]
    RunLength { run: usize, max: usize },
    #[error("short write: {written} of {len} bytes accepted")]
    ShortWrite { written: usize, len: usize },
    #[error(transparent)]
    Port(#[from] port::PortError),
}

pub type Result<T> = std::result::Result<T, PulseError>;
