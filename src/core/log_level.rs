//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl LogLevel {
    /// Number of severities; the per-level configuration table has exactly this many entries.
    pub const COUNT: usize = 5;

    /// Every severity, least severe first.
    pub const ALL: [LogLevel; LogLevel::COUNT] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Position of this level in [`LogLevel::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used inside the `[<level>]` tag of a rendered record.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
        }
    }

    /// File name a level writes to until reconfigured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug.log",
            LogLevel::Info => "info.log",
            LogLevel::Warning => "warning.log",
            LogLevel::Error => "error.log",
            LogLevel::Critical => "critical.log",
        }
    }

    /// Warning and above go to the error stream on the console.
    #[inline]
    pub fn is_diagnostic(&self) -> bool {
        *self >= LogLevel::Warning
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::InvalidSeverity(value))
    }
}
