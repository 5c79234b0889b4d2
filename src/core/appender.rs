//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// One output sink. Appenders hold no per-record state, so `append` takes `&self`.
pub trait Appender: Send + Sync {
    fn append(&self, entry: &LogEntry<'_>) -> Result<()>;
}
