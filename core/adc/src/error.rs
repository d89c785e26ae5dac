use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdcError {
    #[error("capture channel error: {0}")]
    Port(#[from] port::PortError),
}

pub type Result<T> = std::result::Result<T, AdcError>;
