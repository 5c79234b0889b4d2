//! File appender implementation
//!
//! Nothing is kept open between records: every append opens the file in
//! append mode, writes one line and closes it again.

use crate::core::{Appender, LogEntry, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Appends each record to the file configured for its level.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAppender;

impl FileAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for FileAppender {
    fn append(&self, entry: &LogEntry<'_>) -> Result<()> {
        append_to_file(entry.file_path, entry.line)
    }
}

/// Serializes open/append/close across every logger in the process.
static APPEND_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Append `line` plus a newline to `path`, creating the file if needed.
///
/// Appends from this process are serialized on an in-process mutex. With
/// the `file` feature the advisory lock is only tried, never waited for: a
/// file locked by someone else fails with [`LoggerError::SinkUnavailable`]
/// and the record is dropped. The handle is closed on every return path.
pub fn append_to_file(path: &Path, line: &str) -> Result<()> {
    let unavailable = |e: std::io::Error| LoggerError::sink_unavailable(path.display().to_string(), e);

    let _guard = APPEND_LOCK.lock();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(unavailable)?;

    #[cfg(feature = "file")]
    fs2::FileExt::try_lock_exclusive(&file).map_err(unavailable)?;

    let mut record = String::with_capacity(line.len() + 1);
    record.push_str(line);
    record.push('\n');

    file.write_all(record.as_bytes()).map_err(unavailable)
}
