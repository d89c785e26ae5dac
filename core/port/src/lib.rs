pub mod channel;
pub mod error;
pub mod mem;
pub mod serial;

pub use channel::ByteChannel;
pub use error::{PortError, Result};
pub use mem::MemChannel;
pub use serial::SerialChannel;
