//! # Leveled Logger
//!
//! A small leveled logging library. Each record is gated by a severity
//! threshold, rendered as
//! `YYYY.MM.DD HH:MM:SS [<Level>] <file>.<line> <message>` and written to the
//! console and/or a per-level log file.
//!
//! ## Features
//!
//! - **Per-level routing**: every severity has its own sink set, file and
//!   recorded size limit
//! - **No hidden state**: configuration lives in an owned [`Logger`]
//! - **Crash-safe files**: each record opens, appends and closes its file
//! - **Thread safe on demand**: [`SharedLogger`] adds locking when needed
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let mut logger = Logger::new();
//! logger.set_sinks(LogLevel::Info, SinkSet::CONSOLE);
//! info!(logger, "listening on port {}", 8080);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

/// Library version reported by [`version`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Semantic version of this build.
pub fn version() -> &'static str {
    VERSION
}

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, Clock, FixedClock, LevelConfig, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, SharedLogger, Sink, SinkSet, SystemClock,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, Clock, FixedClock, LevelConfig, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, SharedLogger, Sink, SinkSet, SystemClock,
    DEFAULT_MAX_FILE_BYTES, MAX_PATH_LEN,
};
