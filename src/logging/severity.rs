// jrelog/src/logging/severity.rs
//
// Severity levels and their platform priority mapping

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoggingError;

/// Importance of a log message.
///
/// Variants are declared in ascending order so that the derived ordering
/// matches the usual convention: `Error > Warning > Info > Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl Severity {
    /// All severities, most verbose first
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Android `android_LogPriority` value passed to liblog
    pub const fn android_priority(self) -> i32 {
        match self {
            Severity::Debug => 3,
            Severity::Info => 4,
            Severity::Warning => 5,
            Severity::Error => 6,
        }
    }

    /// Single-letter form used by logcat
    pub const fn letter(self) -> char {
        match self {
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
        }
    }

    /// Get the string representation of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Filter for the `log` facade that lets this severity and everything
    /// above it through
    pub fn level_filter(self) -> log::LevelFilter {
        log::Level::from(self).to_level_filter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "error" => Ok(Severity::Error),
            "w" | "warn" | "warning" => Ok(Severity::Warning),
            "i" | "info" => Ok(Severity::Info),
            "d" | "debug" => Ok(Severity::Debug),
            _ => Err(LoggingError::InvalidSeverity(s.to_string())),
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

// Trace has no platform counterpart here and folds into Debug
impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}
