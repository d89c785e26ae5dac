pub mod capture;
pub mod coordinator;
pub mod decode;
pub mod error;
pub mod process;

pub use capture::{CaptureOutcome, read_exact};
pub use coordinator::{ArmedCapture, arm};
pub use decode::decode_stereo;
pub use error::{AdcError, Result};
