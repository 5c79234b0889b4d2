//! Declarative logger configuration
//!
//! A [`LoggerConfig`] is the serializable form of a logger's settings. It
//! can be loaded from JSON, adjusted, and turned into a
//! [`Logger`](super::Logger) with [`Logger::from_config`](super::Logger::from_config).
//!
//! ```json
//! {
//!   "threshold": "warning",
//!   "output_path_prefix": "/var/log/app",
//!   "levels": {
//!     "error": { "sinks": ["console"], "file_path": "error.log" }
//!   }
//! }
//! ```

use super::error::Result;
use super::level_config::{check_path_len, LevelConfig};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub threshold: LogLevel,
    pub output_path_prefix: PathBuf,
    /// Levels absent from the map use [`LevelConfig::for_level`].
    pub levels: BTreeMap<LogLevel, LevelConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: LogLevel::Info,
            output_path_prefix: PathBuf::new(),
            levels: LogLevel::ALL
                .iter()
                .map(|level| (*level, LevelConfig::for_level(*level)))
                .collect(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective configuration of `level`, falling back to the built-in default.
    pub fn level(&self, level: LogLevel) -> LevelConfig {
        self.levels
            .get(&level)
            .cloned()
            .unwrap_or_else(|| LevelConfig::for_level(level))
    }

    /// Check every path against the length bound.
    pub fn validate(&self) -> Result<()> {
        check_path_len("output_path_prefix", &self.output_path_prefix)?;
        for config in self.levels.values() {
            config.validate()?;
        }
        Ok(())
    }
}
