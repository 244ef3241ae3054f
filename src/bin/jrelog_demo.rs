// jrelog/src/bin/jrelog_demo.rs
//
// Emits a few tagged lines at every severity through the system log

use anyhow::Result;
use jrelog::{init_logger, logd, loge, logi, logw, Logger, LoggerConfig, Tag};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(json) => LoggerConfig::from_json(&json)?,
        None => LoggerConfig::default(),
    };
    init_logger(&config)?;

    // Default tag from the configuration
    logi!("loaded {} items", 5);
    logd!("debug output is {}", "visible");

    // Per-module tag
    let egl = Logger::new(Tag::new("egl")?).with_min_severity(config.min_severity);
    logw!(egl, "falling back to {}", "GLES2");

    // Per-call tag
    loge!(tag: "net", "download failed: {}", "connection reset");

    Ok(())
}
