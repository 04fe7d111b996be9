//! Error types for ucmd.
//!
//! Dispatch failures are reported through [`crate::commands::DispatchError`];
//! this module covers everything around the dispatcher (configuration and
//! console I/O).

use thiserror::Error;

/// Main error type for ucmd operations.
#[derive(Error, Debug)]
pub enum UcmdError {
    /// Configuration errors (unreadable file, invalid TOML, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors on the console input or output streams.
    #[error("I/O error: {0}")]
    Io(String),
}

impl UcmdError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

impl From<std::io::Error> for UcmdError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias using UcmdError.
pub type Result<T> = std::result::Result<T, UcmdError>;
