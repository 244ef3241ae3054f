// jrelog/src/macros/mod.rs
//
// Call-site logging macros, one per severity

// Each macro accepts three forms:
//
//   logi!("loaded {} items", n)             global logger, its tag
//   logi!(logger, "loaded {} items", n)     the given Logger
//   logi!(tag: "net", "loaded {} items", n) global logger, tag for this call
//
// The message is only rendered when the severity is enabled. An invalid
// per-call tag (empty, or containing NUL) falls back to the logger's tag.

/// Shared expansion for the severity macros
#[doc(hidden)]
#[macro_export]
macro_rules! __jrelog_log {
    ($severity:expr, tag: $tag:expr, $($arg:tt)+) => {{
        let logger = $crate::logging::global();
        if logger.is_enabled($severity) {
            logger.log_with_tag($severity, $tag, format_args!($($arg)+));
        }
    }};
    ($severity:expr, $fmt:literal $($arg:tt)*) => {{
        let logger = $crate::logging::global();
        if logger.is_enabled($severity) {
            logger.log($severity, format_args!($fmt $($arg)*));
        }
    }};
    ($severity:expr, $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::logging::Logger = &$logger;
        if logger.is_enabled($severity) {
            logger.log($severity, format_args!($($arg)+));
        }
    }};
}

/// Log at ERROR severity
///
/// # Examples
///
/// ```
/// use jrelog::loge;
///
/// loge!("failed to open {}", "options.txt");
/// ```
#[macro_export]
macro_rules! loge {
    ($($arg:tt)+) => {
        $crate::__jrelog_log!($crate::logging::Severity::Error, $($arg)+)
    };
}

/// Log at WARNING severity
///
/// # Examples
///
/// ```
/// use jrelog::{logw, Logger, Tag};
///
/// let logger = Logger::new(Tag::from_static("Launcher"));
/// logw!(logger, "low memory: {} MiB free", 48);
/// ```
#[macro_export]
macro_rules! logw {
    ($($arg:tt)+) => {
        $crate::__jrelog_log!($crate::logging::Severity::Warning, $($arg)+)
    };
}

/// Log at INFO severity
///
/// # Examples
///
/// ```
/// use jrelog::logi;
///
/// logi!("loaded {} items", 5);
/// ```
#[macro_export]
macro_rules! logi {
    ($($arg:tt)+) => {
        $crate::__jrelog_log!($crate::logging::Severity::Info, $($arg)+)
    };
}

/// Log at DEBUG severity
///
/// # Examples
///
/// ```
/// use jrelog::logd;
///
/// logd!(tag: "egl", "surface {}x{}", 1280, 720);
/// ```
#[macro_export]
macro_rules! logd {
    ($($arg:tt)+) => {
        $crate::__jrelog_log!($crate::logging::Severity::Debug, $($arg)+)
    };
}
