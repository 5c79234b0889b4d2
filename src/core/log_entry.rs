//! Log entry structure and record rendering

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::format_timestamp;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};
use std::path::Path;

/// A rendered record on its way to one sink.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    pub level: LogLevel,
    /// Rendered record without the trailing newline.
    pub line: &'a str,
    /// Resolved file for the level, used by the file sink.
    pub file_path: &'a Path,
}

impl<'a> LogEntry<'a> {
    pub fn new(level: LogLevel, line: &'a str, file_path: &'a Path) -> Self {
        Self {
            level,
            line,
            file_path,
        }
    }
}

/// Where a record was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

impl From<&'static std::panic::Location<'static>> for SourceLocation<'static> {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Renders `<timestamp> [<level>] <file>.<line> <message>`.
///
/// The length is measured first so the buffer is allocated exactly once.
/// Line breaks inside the message are written as the two characters `\n`
/// or `\r` to keep one record per line. Backslashes are left alone, so the
/// escaping is one-way: a literal `\n` in a message reads the same as an
/// escaped line break.
pub fn render_record(
    timestamp: &DateTime<Local>,
    level: LogLevel,
    location: SourceLocation<'_>,
    args: fmt::Arguments<'_>,
) -> Result<String> {
    let mut counter = LengthCounter::default();
    write_record(&mut counter, timestamp, level, location, args)
        .map_err(|_| LoggerError::formatter("text", "message formatting failed"))?;

    let mut line = String::new();
    line.try_reserve_exact(counter.len)
        .map_err(|_| LoggerError::resource_exhausted(counter.len))?;
    write_record(&mut line, timestamp, level, location, args)
        .map_err(|_| LoggerError::formatter("text", "message formatting failed"))?;
    Ok(line)
}

fn write_record<W: Write>(
    out: &mut W,
    timestamp: &DateTime<Local>,
    level: LogLevel,
    location: SourceLocation<'_>,
    args: fmt::Arguments<'_>,
) -> fmt::Result {
    write!(
        out,
        "{} [{}] {}.{} ",
        format_timestamp(timestamp),
        level,
        location.file,
        location.line
    )?;
    EscapeLineBreaks(out).write_fmt(args)
}

#[derive(Default)]
struct LengthCounter {
    len: usize,
}

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

struct EscapeLineBreaks<'w, W: Write>(&'w mut W);

impl<W: Write> Write for EscapeLineBreaks<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        while let Some(pos) = rest.find(|c: char| c == '\n' || c == '\r') {
            self.0.write_str(&rest[..pos])?;
            let escaped = if rest.as_bytes()[pos] == b'\n' { "\\n" } else { "\\r" };
            self.0.write_str(escaped)?;
            rest = &rest[pos + 1..];
        }
        self.0.write_str(rest)
    }
}
