use std::path::PathBuf;

use crate::types::BoardPin;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GpioError {
    #[error("gpio unavailable: {0}")]
    Unavailable(String),

    #[error("pin {0} is not a gpio pin on the board header")]
    InvalidPin(BoardPin),

    #[error("failed to configure pin {pin} as input: {reason}")]
    PinSetup { pin: BoardPin, reason: String },

    #[error("failed to read pin {pin}: {reason}")]
    PinRead { pin: BoardPin, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RfgateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gpio(#[from] GpioError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
