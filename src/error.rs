use std::io;
use thiserror::Error;

/// Custom error type for the battwatch application
#[derive(Error, Debug)]
pub enum BattwatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Battery sensor error: {0}")]
    Battery(#[from] battery::Error),

    #[error("Sensor error: {0}")]
    Sensor(String),

    #[error("Journal error: {0}")]
    Journal(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),
}

/// Result type alias for the battwatch application
pub type Result<T> = std::result::Result<T, BattwatchError>;

impl BattwatchError {
    /// Create a sensor error
    pub fn sensor<S: Into<String>>(msg: S) -> Self {
        BattwatchError::Sensor(msg.into())
    }

    /// Create a journal error
    pub fn journal<S: Into<String>>(msg: S) -> Self {
        BattwatchError::Journal(msg.into())
    }

    /// Create a notification error
    pub fn notification<S: Into<String>>(msg: S) -> Self {
        BattwatchError::Notification(msg.into())
    }

    /// Create a speech synthesis error
    pub fn speech<S: Into<String>>(msg: S) -> Self {
        BattwatchError::Speech(msg.into())
    }
}
