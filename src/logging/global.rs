// jrelog/src/logging/global.rs
//
// Process-wide logger used by the logging macros

use std::sync::OnceLock;

use super::Logger;
use crate::errors::LoggingError;

static INSTALLED: OnceLock<Logger> = OnceLock::new();
static FALLBACK: OnceLock<Logger> = OnceLock::new();

/// The installed logger, or the `"jrelog"` default when none was installed
pub fn global() -> &'static Logger {
    INSTALLED
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(Logger::default))
}

/// Install the process-wide logger. Only the first call succeeds.
pub fn set_global(logger: Logger) -> Result<(), LoggingError> {
    INSTALLED
        .set(logger)
        .map_err(|_| LoggingError::AlreadyInitialized)
}

pub(crate) fn is_installed() -> bool {
    INSTALLED.get().is_some()
}
