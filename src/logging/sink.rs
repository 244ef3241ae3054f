// jrelog/src/logging/sink.rs
//
// Destinations that receive fully rendered log lines

use std::cell::Cell;
use std::sync::{Arc, Mutex, MutexGuard};

use super::Severity;

/// Receiver of rendered log lines.
///
/// A write never reports failure back to the caller; a sink that cannot
/// deliver a line drops it.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, tag: &str, message: &str);
}

/// The sink that reaches the system log on the current target
pub fn platform_sink() -> Arc<dyn LogSink> {
    #[cfg(target_os = "android")]
    {
        Arc::new(AndroidSink)
    }

    #[cfg(not(target_os = "android"))]
    {
        Arc::new(FacadeSink)
    }
}

/// Cut a string at its first NUL, which is where liblog would stop reading
/// anyway.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub(crate) fn until_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

#[cfg(target_os = "android")]
mod android {
    use super::{until_nul, LogSink};
    use crate::logging::Severity;

    /// Writes to logcat through liblog
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AndroidSink;

    impl LogSink for AndroidSink {
        fn write(&self, severity: Severity, tag: &str, message: &str) {
            let tag = until_nul(tag).to_string();
            let message = until_nul(message).to_string();
            match severity {
                Severity::Debug => android_logger_lite::d(tag, message),
                Severity::Info => android_logger_lite::i(tag, message),
                Severity::Warning => android_logger_lite::w(tag, message),
                Severity::Error => android_logger_lite::e(tag, message),
            };
        }
    }
}

#[cfg(target_os = "android")]
pub use android::AndroidSink;

thread_local! {
    static IN_FACADE: Cell<bool> = const { Cell::new(false) };
}

/// Forwards lines to the `log` facade, using the tag as the record target.
///
/// A line written while the same thread is already inside this sink is
/// dropped. That happens when the installed `log` logger routes records back
/// here, e.g. a [`LogBridge`](super::LogBridge) over a facade-backed logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        if IN_FACADE.with(|busy| busy.replace(true)) {
            return;
        }
        let _reset = FacadeReset;
        log::log!(target: tag, log::Level::from(severity), "{}", message);
    }
}

// Clears the re-entrancy flag even if the installed logger panics
struct FacadeReset;

impl Drop for FacadeReset {
    fn drop(&mut self) {
        IN_FACADE.with(|busy| busy.set(false));
    }
}

/// A line captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
}

/// Keeps every line in memory, in write order
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: a push either happened or it did not
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the captured lines
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Remove and return the captured lines
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogSink for RecordingSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        self.lock().push(LogRecord {
            severity,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
