//! Error types for logger setup
//!
//! Only setup paths (tag validation, configuration, initialization) can
//! fail. The logging entry points themselves never return errors.

use thiserror::Error;

/// Errors raised while building or installing a logger
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Tag is empty or contains an interior NUL
    #[error("Invalid log tag '{0}'")]
    InvalidTag(String),

    /// Severity name not recognised
    #[error("Invalid severity '{0}'")]
    InvalidSeverity(String),

    /// A global logger was already installed
    #[error("Logger already initialized")]
    AlreadyInitialized,

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<log::SetLoggerError> for LoggingError {
    fn from(_: log::SetLoggerError) -> Self {
        LoggingError::AlreadyInitialized
    }
}
