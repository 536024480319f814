//! Logging abstraction for runtime-agnostic use
//!
//! The core never writes to a concrete sink itself; the embedding process
//! supplies a [`Logger`] and the registry reports startup progress through it.

use std::sync::Arc;

/// Logger abstraction the registry reports through
///
/// Implementations:
/// - [`NoOpLogger`]: Silent logger for testing
/// - [`ConsoleLogger`]: Logs to stdout/stderr
/// - Host adapters: forward into whatever the embedding service uses
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// A logger that discards everything
///
/// Useful for tests or embedders that do their own logging at the call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// A logger that writes to the console (stdout for info, stderr otherwise)
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[realm-core]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{} DEBUG: {}", self.prefix, message);
    }

    fn info(&self, message: &str) {
        println!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_is_silent() {
        let logger = NoOpLogger::new();

        // None of these should panic or produce output
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[realm-core]");

        let custom = ConsoleLogger::with_prefix("[provider]");
        assert_eq!(custom.prefix, "[provider]");
    }

    #[test]
    fn test_logger_is_object_safe() {
        let logger: SharedLogger = Arc::new(NoOpLogger::new());
        logger.info("through the trait object");
    }
}
