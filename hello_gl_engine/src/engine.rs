/// HelloGL Engine - process-wide services
///
/// The only global state of the engine is its logger. Every device resource
/// is owned by the frame loop that created it, never by a singleton.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Engine facade for process-wide services
///
/// # Example
///
/// ```no_run
/// use hello_gl_engine::hellogl::{Engine, log::{Logger, LogEntry}};
///
/// struct Quiet;
/// impl Logger for Quiet {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Engine::set_logger(Quiet);
/// ```
pub struct Engine;

impl Engine {
    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without file:line (used by engine_info!, engine_warn!, ...)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by engine_error!, engine_err!, engine_bail!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
