// jrelog/src/lib.rs
//
// Tagged severity logging for native launcher code

// Export modules
pub mod config;
pub mod errors;
pub mod init;
pub mod logging;
pub mod macros;

// Re-export the types call sites need at the root level
pub use config::LoggerConfig;
pub use errors::LoggingError;
pub use init::init_logger;
pub use logging::{global, set_global, Logger, Severity, Tag, DEFAULT_TAG};

// The loge!/logw!/logi!/logd! macros are exported at the crate root by
// #[macro_export]; `use jrelog::logi;` works as expected.
