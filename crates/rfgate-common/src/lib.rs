pub mod board;
pub mod errors;
pub mod types;

pub use errors::{ConfigError, GpioError, RfgateError};
pub use types::{logical_state, BoardPin, Transition};

pub type Result<T> = std::result::Result<T, RfgateError>;
