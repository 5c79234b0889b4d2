//! Thread-safe logger handle
//!
//! [`Logger`] is single-owner. [`SharedLogger`] puts it behind a
//! read/write lock so records can be dispatched from many threads while
//! configuration changes take exclusive access. The handle can be disposed
//! explicitly; later use is reported instead of crashing.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::logger::Logger;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Cloneable handle to one [`Logger`].
///
/// # Example
///
/// ```
/// use leveled_logger::{LogLevel, Logger, SharedLogger, SinkSet};
///
/// let shared = SharedLogger::new(Logger::new());
/// shared.configure(|logger| logger.set_sinks(LogLevel::Info, SinkSet::NONE)).unwrap();
///
/// let worker = shared.clone();
/// std::thread::spawn(move || worker.info("from a thread")).join().unwrap();
///
/// assert!(shared.dispose());
/// assert!(!shared.dispose());
/// ```
#[derive(Clone, Default)]
pub struct SharedLogger {
    inner: Arc<RwLock<Option<Logger>>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(logger))),
        }
    }

    /// Dispatch one record under the read lock.
    ///
    /// After [`dispose`](SharedLogger::dispose) this writes a `NullHandle`
    /// diagnostic to stderr and does nothing else.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        match &*self.inner.read() {
            Some(logger) => logger.log(level, file, line, args),
            None => eprintln!("[LOGGER ERROR] {}", LoggerError::NullHandle),
        }
    }

    /// Run `f` with exclusive access to the logger.
    pub fn configure<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> Result<R> {
        let mut guard = self.inner.write();
        let logger = (*guard).as_mut().ok_or(LoggerError::NullHandle)?;
        Ok(f(logger))
    }

    /// Run `f` with shared access to the logger.
    pub fn inspect<R>(&self, f: impl FnOnce(&Logger) -> R) -> Result<R> {
        let guard = self.inner.read();
        let logger = (*guard).as_ref().ok_or(LoggerError::NullHandle)?;
        Ok(f(logger))
    }

    pub fn set_threshold(&self, level: LogLevel) -> Result<()> {
        self.configure(|logger| logger.set_threshold(level))
    }

    /// Release the logger. Returns `true` only for the call that released it.
    pub fn dispose(&self) -> bool {
        self.inner.write().take().is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.read().is_none()
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at_caller(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at_caller(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log_at_caller(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at_caller(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log_at_caller(LogLevel::Critical, message);
    }

    #[track_caller]
    fn log_at_caller(&self, level: LogLevel, message: impl fmt::Display) {
        let location = std::panic::Location::caller();
        self.log(level, location.file(), location.line(), format_args!("{}", message));
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl fmt::Debug for SharedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogger")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
