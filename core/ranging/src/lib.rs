pub mod config;
pub mod error;
pub mod process;
pub mod session;
pub mod types;

pub use config::RangingConfig;
pub use error::{RangingError, Result};
pub use session::RangingSession;
pub use types::{PeakInfo, RangingReport};
