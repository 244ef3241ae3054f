// jrelog/src/init.rs
//
// One-time logging setup for the process

use std::io;

use chrono::NaiveDateTime;

use crate::config::LoggerConfig;
use crate::errors::LoggingError;
use crate::logging::{is_installed, set_global, Logger, Severity};

/// Install the process-wide logger and hook the `log` facade up to the
/// system log.
///
/// On Android, `log` records are bridged into logcat through the global
/// logger. Elsewhere `env_logger` prints logcat-style lines to stderr.
///
/// The `log` backend is registered before the global logger, so a failure
/// leaves nothing installed. Fails with [`LoggingError::AlreadyInitialized`]
/// when either one is already in place.
#[cfg(target_os = "android")]
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggingError> {
    use crate::logging::LogBridge;

    let logger = Logger::from_config(config)?;
    if is_installed() {
        return Err(LoggingError::AlreadyInitialized);
    }

    log::set_boxed_logger(Box::new(LogBridge::new(logger.clone())))?;
    log::set_max_level(config.min_severity.level_filter());
    set_global(logger)
}

#[cfg(not(target_os = "android"))]
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggingError> {
    let logger = Logger::from_config(config)?;
    if is_installed() {
        return Err(LoggingError::AlreadyInitialized);
    }

    env_logger::Builder::new()
        .filter_level(config.min_severity.level_filter())
        .format(|buf, record| write_host_line(buf, &chrono::Local::now().naive_local(), record))
        .try_init()?;
    set_global(logger)
}

/// Render `record` as a logcat-style line:
/// `MM-DD HH:MM:SS.mmm L/tag: message`
#[cfg_attr(target_os = "android", allow(dead_code))]
pub(crate) fn write_host_line(
    out: &mut impl io::Write,
    time: &NaiveDateTime,
    record: &log::Record<'_>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}/{}: {}",
        time.format("%m-%d %H:%M:%S%.3f"),
        Severity::from(record.level()).letter(),
        record.target(),
        record.args()
    )
}
