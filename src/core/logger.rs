//! Main logger implementation
//!
//! A [`Logger`] owns the whole configuration: the threshold, the output
//! path prefix and one [`LevelConfig`] per severity, stored in an array
//! indexed by [`LogLevel::index`]. Every record goes through [`Logger::log`].

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    level_config::{check_path_len, LevelConfig},
    log_entry::{render_record, LogEntry, SourceLocation},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink_set::{Sink, SinkSet},
    timestamp::{Clock, SystemClock},
};
use crate::appenders::{ConsoleAppender, FileAppender};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

pub struct Logger {
    threshold: LogLevel,
    output_path_prefix: PathBuf,
    levels: [LevelConfig; LogLevel::COUNT],
    console: ConsoleAppender,
    file: FileAppender,
    clock: Box<dyn Clock>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with built-in defaults and an `Info` threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(LogLevel::Info)
    }

    /// Logger with built-in defaults: every level writes to both sinks,
    /// `<level>.log`, 10 MB recorded maximum.
    #[must_use]
    pub fn with_threshold(threshold: LogLevel) -> Self {
        Self {
            threshold,
            output_path_prefix: PathBuf::new(),
            levels: LogLevel::ALL.map(LevelConfig::for_level),
            console: ConsoleAppender::new(),
            file: FileAppender::new(),
            clock: Box::new(SystemClock),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a declarative configuration.
    ///
    /// Levels missing from `config.levels` keep their built-in defaults.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Snapshot of the current configuration, including every level.
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            threshold: self.threshold,
            output_path_prefix: self.output_path_prefix.clone(),
            levels: LogLevel::ALL
                .iter()
                .map(|level| (*level, self.levels[level.index()].clone()))
                .collect(),
        }
    }

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn set_threshold(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    #[inline]
    pub fn output_path_prefix(&self) -> &Path {
        &self.output_path_prefix
    }

    /// Set the directory or prefix joined in front of every level's file path.
    ///
    /// Paths longer than [`MAX_PATH_LEN`](super::level_config::MAX_PATH_LEN)
    /// bytes are rejected and the previous prefix is kept.
    pub fn set_output_path_prefix(&mut self, prefix: impl Into<PathBuf>) -> Result<()> {
        let prefix = prefix.into();
        check_path_len("output_path_prefix", &prefix)?;
        self.output_path_prefix = prefix;
        Ok(())
    }

    #[inline]
    pub fn level_config(&self, level: LogLevel) -> &LevelConfig {
        &self.levels[level.index()]
    }

    pub fn set_sinks(&mut self, level: LogLevel, sinks: SinkSet) {
        self.levels[level.index()].set_sinks(sinks);
    }

    pub fn set_file_path(&mut self, level: LogLevel, path: impl Into<PathBuf>) -> Result<()> {
        self.levels[level.index()].set_file_path(path.into())
    }

    pub fn set_max_file_bytes(&mut self, level: LogLevel, bytes: u64) {
        self.levels[level.index()].set_max_file_bytes(bytes);
    }

    /// File that records of `level` are appended to.
    pub fn resolved_file_path(&self, level: LogLevel) -> Cow<'_, Path> {
        let file_path = self.levels[level.index()].file_path();
        if self.output_path_prefix.as_os_str().is_empty() {
            Cow::Borrowed(file_path)
        } else {
            Cow::Owned(self.output_path_prefix.join(file_path))
        }
    }

    /// Whether a record at `level` would reach any sink.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold && !self.levels[level.index()].sinks().is_empty()
    }

    /// Render and write one record.
    ///
    /// Never fails from the caller's point of view: sink failures are
    /// reported on the console error stream, formatting failures drop the
    /// record, and both are counted in [`Logger::metrics`].
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let rendered = match render_record(
            &self.clock.now(),
            level,
            SourceLocation::new(file, line),
            args,
        ) {
            Ok(rendered) => rendered,
            Err(e) => {
                self.metrics.record_format_failure();
                if matches!(e, LoggerError::ResourceExhausted { .. }) {
                    self.console.report(&e.to_string());
                }
                return;
            }
        };

        self.metrics.record_dispatched();
        let file_path = self.resolved_file_path(level);
        let entry = LogEntry::new(level, &rendered, &file_path);

        for sink in self.levels[level.index()].sinks().iter() {
            let appender: &dyn Appender = match sink {
                Sink::Console => &self.console,
                Sink::File => &self.file,
            };
            if let Err(e) = appender.append(&entry) {
                self.metrics.record_sink_failure();
                self.console.report(&e.to_string());
            }
        }
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

    /// Get the dispatch counters
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{LogLevel, Logger, SinkSet};
    ///
    /// let mut logger = Logger::new();
    /// logger.set_sinks(LogLevel::Debug, SinkSet::NONE);
    /// logger.debug("below threshold");
    ///
    /// assert_eq!(logger.metrics().suppressed(), 1);
    /// assert_eq!(logger.metrics().dispatched(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(LogLevel::Debug)
    ///     .sinks(LogLevel::Debug, SinkSet::CONSOLE)
    ///     .build()
    ///     .unwrap();
    /// assert!(logger.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("output_path_prefix", &self.output_path_prefix)
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Invalid paths do not fail the chained call; the first error is
/// returned from [`LoggerBuilder::build`].
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Warning)
///     .output_path_prefix("logs")
///     .file_path(LogLevel::Error, "app-errors.log")
///     .max_file_bytes(LogLevel::Error, 1_000_000)
///     .build()
///     .unwrap();
/// assert_eq!(
///     logger.resolved_file_path(LogLevel::Error).as_ref(),
///     std::path::Path::new("logs/app-errors.log")
/// );
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<ConsoleAppender>,
    clock: Option<Box<dyn Clock>>,
    error: Option<LoggerError>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console: None,
            clock: None,
            error: None,
        }
    }

    /// Start from a declarative configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.config.threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_path_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.config.output_path_prefix = prefix.into();
        self
    }

    /// Replace the whole configuration of one level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel, config: LevelConfig) -> Self {
        self.config.levels.insert(level, config);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sinks(mut self, level: LogLevel, sinks: SinkSet) -> Self {
        self.level_mut(level).set_sinks(sinks);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, level: LogLevel, path: impl Into<PathBuf>) -> Self {
        if let Err(e) = self.level_mut(level).set_file_path(path.into()) {
            self.error.get_or_insert(e);
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_file_bytes(mut self, level: LogLevel, bytes: u64) -> Self {
        self.level_mut(level).set_max_file_bytes(bytes);
        self
    }

    /// Use a specific console appender, e.g. one with captured streams
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    /// Use a specific time source
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    fn level_mut(&mut self, level: LogLevel) -> &mut LevelConfig {
        self.config
            .levels
            .entry(level)
            .or_insert_with(|| LevelConfig::for_level(level))
    }

    /// Build the Logger, validating every path
    pub fn build(self) -> Result<Logger> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.config.validate()?;

        let mut logger = Logger::with_threshold(self.config.threshold);
        logger.output_path_prefix = self.config.output_path_prefix;
        for (level, config) in self.config.levels {
            logger.levels[level.index()] = config;
        }
        if let Some(console) = self.console {
            logger.console = console;
        }
        if let Some(clock) = self.clock {
            logger.clock = clock;
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
