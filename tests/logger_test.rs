use std::sync::Arc;
use std::thread;

use anyhow::Result;
use jrelog::logging::{LogRecord, RecordingSink};
use jrelog::{Logger, LoggerConfig, Severity, Tag};

fn recording_logger(tag: Tag) -> (Logger, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let logger = Logger::new(tag).with_sink(sink.clone());
    (logger, sink)
}

#[test]
fn test_each_entry_point_writes_once() -> Result<()> {
    let (logger, sink) = recording_logger(Tag::DEFAULT);

    logger.error("e");
    logger.warn("w");
    logger.info("i");
    logger.debug("d");

    let records = sink.take();
    let expected = [
        (Severity::Error, "e"),
        (Severity::Warning, "w"),
        (Severity::Info, "i"),
        (Severity::Debug, "d"),
    ];
    assert_eq!(records.len(), expected.len());
    for (record, (severity, message)) in records.iter().zip(expected) {
        assert_eq!(record.severity, severity);
        assert_eq!(record.tag, "jrelog");
        assert_eq!(record.message, message);
    }

    Ok(())
}

#[test]
fn test_args_entry_points_render_message() -> Result<()> {
    let (logger, sink) = recording_logger(Tag::DEFAULT);

    logger.info_args(format_args!("loaded {} items", 5));
    logger.error_args(format_args!("exit code {:#x}", 255));
    logger.warn_args(format_args!("{}/{}", "a", "b"));
    logger.debug_args(format_args!("{:>4}", 7));

    let messages: Vec<String> = sink.take().into_iter().map(|r| r.message).collect();
    assert_eq!(messages, ["loaded 5 items", "exit code 0xff", "a/b", "   7"]);

    Ok(())
}

#[test]
fn test_default_logger_tag() {
    assert_eq!(Logger::default().tag().as_str(), "jrelog");
    assert_eq!(Logger::default().min_severity(), Severity::Debug);
}

#[test]
fn test_overridden_tag_applies_to_every_entry_point() -> Result<()> {
    let (logger, sink) = recording_logger(Tag::new("Launcher")?);

    logger.error("a");
    logger.warn("b");
    logger.info_args(format_args!("{}", "c"));
    logger.debug_args(format_args!("d"));

    let records = sink.records();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.tag == "Launcher"));

    Ok(())
}

#[test]
fn test_with_tag_shares_sink() -> Result<()> {
    let (root, sink) = recording_logger(Tag::DEFAULT);
    let egl = root.with_tag(Tag::new("egl")?);

    root.info("root");
    egl.info("child");

    assert_eq!(
        sink.take(),
        vec![
            LogRecord {
                severity: Severity::Info,
                tag: "jrelog".to_string(),
                message: "root".to_string(),
            },
            LogRecord {
                severity: Severity::Info,
                tag: "egl".to_string(),
                message: "child".to_string(),
            },
        ]
    );

    Ok(())
}

#[test]
fn test_literal_message_unchanged() {
    let (logger, sink) = recording_logger(Tag::DEFAULT);

    logger.info_args(format_args!("100% done, {{braces}} kept"));
    logger.warn("%d %s stay literal");

    let records = sink.take();
    assert_eq!(records[0].message, "100% done, {braces} kept");
    assert_eq!(records[1].message, "%d %s stay literal");
}

#[test]
fn test_min_severity_filters() {
    let (logger, sink) = recording_logger(Tag::DEFAULT);
    let logger = logger.with_min_severity(Severity::Warning);

    assert!(logger.is_enabled(Severity::Error));
    assert!(logger.is_enabled(Severity::Warning));
    assert!(!logger.is_enabled(Severity::Info));

    logger.debug("hidden");
    logger.info_args(format_args!("hidden {}", 1));
    logger.warn("shown");
    logger.error("shown");

    let records = sink.take();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.message == "shown"));
}

#[test]
fn test_log_with_tag() {
    let (logger, sink) = recording_logger(Tag::DEFAULT);

    logger.log_with_tag(Severity::Info, "net", format_args!("GET {}", "/versions"));

    let records = sink.take();
    assert_eq!(records[0].tag, "net");
    assert_eq!(records[0].message, "GET /versions");
    assert_eq!(logger.tag().as_str(), "jrelog");
}

#[test]
fn test_log_with_invalid_tag_uses_logger_tag() -> Result<()> {
    let (logger, sink) = recording_logger(Tag::new("Launcher")?);

    logger.log_with_tag(Severity::Warning, "", format_args!("empty"));
    logger.log_with_tag(Severity::Warning, "bad\0tag", format_args!("nul"));

    let tags: Vec<String> = sink.take().into_iter().map(|r| r.tag).collect();
    assert_eq!(tags, ["Launcher", "Launcher"]);

    Ok(())
}

#[test]
fn test_from_config() -> Result<()> {
    let config = LoggerConfig::from_json(r#"{"tag": "Launcher", "min_severity": "info"}"#)?;
    let logger = Logger::from_config(&config)?;
    assert_eq!(logger.tag().as_str(), "Launcher");
    assert_eq!(logger.min_severity(), Severity::Info);

    let bad = LoggerConfig::new().with_tag("");
    assert!(Logger::from_config(&bad).is_err());

    Ok(())
}

#[test]
fn test_concurrent_calls_stay_intact() {
    let (logger, sink) = recording_logger(Tag::DEFAULT);
    let threads = 8;
    let per_thread = 200;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    logger.info_args(format_args!("thread {} message {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = sink.take();
    assert_eq!(records.len(), threads * per_thread);

    for t in 0..threads {
        let prefix = format!("thread {} message ", t);
        let mut seen: Vec<usize> = records
            .iter()
            .filter_map(|r| r.message.strip_prefix(&prefix))
            .map(|n| n.parse().unwrap())
            .collect();
        // Per-thread order is preserved by the sink
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        seen.sort_unstable();
        assert_eq!(seen, (0..per_thread).collect::<Vec<_>>());
    }
}
