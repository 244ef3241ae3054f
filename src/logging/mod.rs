// Logging utilities for native launcher code
//
// This module provides:
// - Severity levels mapped onto the platform log priorities
// - Component tags with a fixed fallback ("jrelog")
// - A tagged Logger forwarding rendered lines to a LogSink
// - A process-wide default logger and a bridge for the `log` facade

use std::fmt;
use std::sync::Arc;

mod bridge;
mod global;
mod severity;
pub mod sink;
mod tag;

pub use bridge::LogBridge;
pub use global::{global, set_global};
pub(crate) use global::is_installed;
pub use severity::Severity;
pub use sink::{platform_sink, FacadeSink, LogRecord, LogSink, RecordingSink};
pub use tag::{Tag, DEFAULT_TAG};

#[cfg(target_os = "android")]
pub use sink::AndroidSink;

use crate::config::LoggerConfig;
use crate::errors::LoggingError;

/// A tagged logger.
///
/// Every enabled call produces exactly one write on the sink, carrying the
/// logger's tag, the call's severity and the rendered message. Loggers are
/// cheap to clone and share their sink.
#[derive(Clone)]
pub struct Logger {
    /// Tag attached to every line
    tag: Tag,
    /// Least severe level that is still written
    min_severity: Severity,
    /// Where rendered lines go
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger for `tag` writing to the platform sink
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            min_severity: Severity::Debug,
            sink: platform_sink(),
        }
    }

    /// Create a logger from configuration, validating the tag
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LoggingError> {
        let tag = Tag::new(config.tag.clone())?;
        Ok(Self::new(tag).with_min_severity(config.min_severity))
    }

    /// Replace the sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set the least severe level that is still written
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Create a logger with another tag that shares this logger's sink and
    /// threshold. This is how a module overrides the default tag.
    pub fn with_tag(&self, tag: Tag) -> Self {
        Self {
            tag,
            min_severity: self.min_severity,
            sink: Arc::clone(&self.sink),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Whether a call at `severity` reaches the sink
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Log a pre-formatted message under the logger's tag
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_with_tag(severity, self.tag.as_str(), args);
    }

    /// Log under an explicit tag for this call only.
    ///
    /// A tag that [`Tag::new`] would reject (empty, or containing NUL) is
    /// replaced by the logger's own tag.
    pub fn log_with_tag(&self, severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }
        let tag = if Tag::is_valid(tag) { tag } else { self.tag.as_str() };
        // Literal-only messages skip the allocation
        match args.as_str() {
            Some(message) => self.sink.write(severity, tag, message),
            None => self.sink.write(severity, tag, &args.to_string()),
        }
    }

    fn emit(&self, severity: Severity, message: &str) {
        if self.is_enabled(severity) {
            self.sink.write(severity, self.tag.as_str(), message);
        }
    }

    /// Log an error message
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(Severity::Error, message.as_ref());
    }

    /// Log a warning message
    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(Severity::Warning, message.as_ref());
    }

    /// Log an info message
    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(Severity::Info, message.as_ref());
    }

    /// Log a debug message
    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(Severity::Debug, message.as_ref());
    }

    pub fn error_args(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    pub fn warn_args(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    pub fn info_args(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn debug_args(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }
}

impl Default for Logger {
    /// Logger tagged `"jrelog"` on the platform sink with every level enabled
    fn default() -> Self {
        Self::new(Tag::DEFAULT)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("min_severity", &self.min_severity)
            .finish_non_exhaustive()
    }
}
