pub mod bits;
pub mod codec;
pub mod error;
pub mod process;
pub mod safety;
pub mod types;
pub mod writer;

pub use codec::{gen_cf, gen_fm, synthesize};
pub use error::{PulseError, Result};
pub use safety::SafetyPolicy;
pub use types::{BIT_CLOCK_HZ, Waveform};
pub use writer::transmit;
