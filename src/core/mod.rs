//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod level_config;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod shared;
pub mod sink_set;
pub mod timestamp;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use level_config::{LevelConfig, DEFAULT_MAX_FILE_BYTES, MAX_PATH_LEN};
pub use log_entry::{render_record, LogEntry, SourceLocation};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use shared::SharedLogger;
pub use sink_set::{Sink, SinkSet};
pub use timestamp::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
