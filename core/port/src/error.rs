use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortError {
    #[error("unsupported baud rate: {0}")]
    UnsupportedBaud(u32),
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: serialport::Error,
    },
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortError>;
