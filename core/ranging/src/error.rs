use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangingError {
    #[error(transparent)]
    Pulse(#[from] pulse::PulseError),
    #[error(transparent)]
    Adc(#[from] adc::AdcError),
    #[error(transparent)]
    Xcorr(#[from] xcorr::XcorrError),
    #[error(transparent)]
    Port(#[from] port::PortError),
    #[error("capture too short: {got} bytes, correlation needs {need}")]
    ShortCapture { got: usize, need: usize },
    #[error("ADC channel is gone; reopen the session")]
    ChannelLost,
}

pub type Result<T> = std::result::Result<T, RangingError>;
