use thiserror::Error;

#[derive(Error, Debug)]
pub enum XcorrError {
    #[error("transform length {0} is invalid")]
    InvalidLength(usize),
    #[error("sample rate {0} Hz is invalid")]
    InvalidRate(f64),
    #[error("buffer holds {got} samples, transform needs {need}")]
    LengthMismatch { got: usize, need: usize },
    #[error("invalid reference parameter: {0}")]
    BadReference(String),
}

pub type Result<T> = std::result::Result<T, XcorrError>;
