use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtrlError {
    #[error("no reply from controller within the timeout")]
    Timeout,
    #[error("unexpected reply: {reply:?}")]
    BadReply { reply: String },
    #[error("control channel error: {0}")]
    Port(#[from] port::PortError),
}

pub type Result<T> = std::result::Result<T, CtrlError>;
