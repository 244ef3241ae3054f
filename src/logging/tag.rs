// jrelog/src/logging/tag.rs
//
// Component tag attached to every log line

use std::borrow::Cow;
use std::fmt;

use crate::errors::LoggingError;

/// Tag used when the caller does not choose one
pub const DEFAULT_TAG: &str = "jrelog";

/// Name of the emitting component as shown in the system log
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// The fallback tag, `"jrelog"`
    pub const DEFAULT: Tag = Tag::from_static(DEFAULT_TAG);

    /// Create a validated tag
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Result<Self, LoggingError> {
        let tag = tag.into();
        if !Self::is_valid(&tag) {
            return Err(LoggingError::InvalidTag(tag.into_owned()));
        }
        Ok(Tag(tag))
    }

    /// Whether `tag` is non-empty and free of NUL bytes
    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && !tag.contains('\0')
    }

    /// Create a tag from a literal without validation.
    ///
    /// Intended for `const` tags declared next to the code that uses them.
    pub const fn from_static(tag: &'static str) -> Self {
        Tag(Cow::Borrowed(tag))
    }

    /// Get the tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::DEFAULT
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tag() {
        assert_eq!(Tag::default().as_str(), "jrelog");
        assert_eq!(Tag::DEFAULT, Tag::from_static(DEFAULT_TAG));
    }

    #[test]
    fn test_validation() {
        assert_eq!(Tag::new("Launcher").unwrap().as_str(), "Launcher");
        assert_eq!(Tag::new(String::from("egl")).unwrap().to_string(), "egl");
        assert!(matches!(Tag::new(""), Err(LoggingError::InvalidTag(_))));
        assert!(matches!(Tag::new("bad\0tag"), Err(LoggingError::InvalidTag(_))));
        assert!(Tag::is_valid("net"));
        assert!(!Tag::is_valid(""));
    }
}
