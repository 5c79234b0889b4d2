//! Per-severity output configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::sink_set::SinkSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recorded maximum size of a level's log file.
///
/// Advisory only: nothing compares it against the size of the file on disk.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10_000_000;

/// Longest path, in bytes, accepted for a file name or the output prefix.
pub const MAX_PATH_LEN: usize = 255;

/// Where records of one severity go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(default = "default_sinks")]
    sinks: SinkSet,
    file_path: PathBuf,
    #[serde(default = "default_max_file_bytes")]
    max_file_bytes: u64,
}

fn default_sinks() -> SinkSet {
    SinkSet::ALL
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

impl LevelConfig {
    /// Built-in configuration: both sinks, `<level>.log`, 10 MB.
    pub fn for_level(level: LogLevel) -> Self {
        Self {
            sinks: SinkSet::ALL,
            file_path: PathBuf::from(level.default_file_name()),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    pub fn new(sinks: SinkSet, file_path: impl Into<PathBuf>, max_file_bytes: u64) -> Result<Self> {
        let file_path = file_path.into();
        check_path_len("file_path", &file_path)?;
        Ok(Self {
            sinks,
            file_path,
            max_file_bytes,
        })
    }

    #[inline]
    pub fn sinks(&self) -> SinkSet {
        self.sinks
    }

    #[inline]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    #[inline]
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    pub(crate) fn set_sinks(&mut self, sinks: SinkSet) {
        self.sinks = sinks;
    }

    pub(crate) fn set_file_path(&mut self, path: PathBuf) -> Result<()> {
        check_path_len("file_path", &path)?;
        self.file_path = path;
        Ok(())
    }

    pub(crate) fn set_max_file_bytes(&mut self, bytes: u64) {
        self.max_file_bytes = bytes;
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_path_len("file_path", &self.file_path)
    }
}

/// Rejects paths longer than [`MAX_PATH_LEN`] bytes.
pub(crate) fn check_path_len(component: &str, path: &Path) -> Result<()> {
    let len = path.as_os_str().len();
    if len > MAX_PATH_LEN {
        return Err(LoggerError::invalid_argument(
            component,
            format!("path is {} bytes, limit is {}", len, MAX_PATH_LEN),
        ));
    }
    Ok(())
}
