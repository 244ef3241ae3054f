// jrelog/src/logging/bridge.rs
//
// Routes records from the `log` facade into a Logger

use super::{Logger, Severity};

/// `log::Log` implementation over a [`Logger`].
///
/// Records keep their explicit target as the tag. Records whose target is
/// just their module path (what `log::info!` uses by default) get the
/// logger's own tag instead.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn tag_for<'a>(&'a self, record: &'a log::Record<'_>) -> &'a str {
        let target = record.target();
        match record.module_path() {
            Some(module) if module == target => self.logger.tag().as_str(),
            _ if target.is_empty() => self.logger.tag().as_str(),
            _ => target,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let severity = Severity::from(record.level());
        self.logger
            .log_with_tag(severity, self.tag_for(record), *record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use log::Log;

    use super::*;
    use crate::logging::{RecordingSink, Tag};

    fn bridge(sink: &Arc<RecordingSink>) -> LogBridge {
        let logger = Logger::new(Tag::from_static("Launcher"))
            .with_sink(sink.clone())
            .with_min_severity(Severity::Info);
        LogBridge::new(logger)
    }

    #[test]
    fn test_module_target_uses_logger_tag() {
        let sink = Arc::new(RecordingSink::new());
        let bridge = bridge(&sink);

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .target("launcher::assets")
                .module_path(Some("launcher::assets"))
                .args(format_args!("missing {} assets", 3))
                .build(),
        );

        let records = sink.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Warning);
        assert_eq!(records[0].tag, "Launcher");
        assert_eq!(records[0].message, "missing 3 assets");
    }

    #[test]
    fn test_explicit_target_becomes_tag() {
        let sink = Arc::new(RecordingSink::new());
        let bridge = bridge(&sink);

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Error)
                .target("gl4es")
                .module_path(Some("launcher::render"))
                .args(format_args!("no context"))
                .build(),
        );

        assert_eq!(sink.records()[0].tag, "gl4es");
    }

    #[test]
    fn test_threshold_applies() {
        let sink = Arc::new(RecordingSink::new());
        let bridge = bridge(&sink);

        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let info = log::Metadata::builder().level(log::Level::Info).build();
        assert!(!bridge.enabled(&debug));
        assert!(bridge.enabled(&info));

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Trace)
                .args(format_args!("dropped"))
                .build(),
        );
        assert!(sink.is_empty());
    }
}
