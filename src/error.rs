//! Error types for wavwhisper

use thiserror::Error;

/// Result type alias for wavwhisper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavwhisper
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed RIFF/WAVE container
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// Sample width unusable for low-byte embedding
    #[error("Unsupported sample width: {bits} bits per sample, embedding needs 16 to 32")]
    UnsupportedSampleWidth { bits: u16 },

    /// Payload shorter than one length-frame seed
    #[error("Payload too small: {0} bytes, length framing needs at least 4")]
    PayloadTooSmall(u64),

    /// Carrier data region has too few sample slots
    #[error("Carrier too small: need {need} sample slots, have {have}")]
    CapacityTooSmall { need: u64, have: u64 },

    /// Recovered payload length exceeds what the carrier actually holds
    #[error("Length mismatch: frame declares {expected} bytes, carrier held {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a malformed-container error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedContainer(msg.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
