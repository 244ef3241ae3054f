// jrelog/src/config.rs
//
// Logger configuration, loadable from the launcher's JSON settings

use serde::{Deserialize, Serialize};

use crate::errors::LoggingError;
use crate::logging::{Severity, Tag, DEFAULT_TAG};

/// Settings for a [`Logger`](crate::Logger).
///
/// Missing fields fall back to the tag `"jrelog"` with every level enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Tag attached to every line
    pub tag: String,
    /// Least severe level that is still written
    pub min_severity: Severity,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            min_severity: Severity::Debug,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, LoggingError> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Check that the tag is usable
    pub fn validate(&self) -> Result<(), LoggingError> {
        Tag::new(self.tag.clone()).map(|_| ())
    }
}
