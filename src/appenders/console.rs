//! Console appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

type BoxedWriter = Mutex<Box<dyn Write + Send>>;

/// Writes records to stdout (below Warning) or stderr (Warning and above).
///
/// The same error stream carries the logger's own `[LOGGER ERROR]`
/// diagnostics.
pub struct ConsoleAppender {
    use_colors: bool,
    stdout: Option<BoxedWriter>,
    stderr: Option<BoxedWriter>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            stdout: None,
            stderr: None,
        }
    }

    /// Colour the `[<level>]` tag. Has no effect without the `console` feature.
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Replace the process streams, e.g. with [`SharedBuffer`]s for capture.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::appenders::console::{ConsoleAppender, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let err = SharedBuffer::new();
    /// let appender = ConsoleAppender::new().with_writers(out.clone(), err.clone());
    /// appender.report("disk full");
    /// assert_eq!(err.contents(), "[LOGGER ERROR] disk full\n");
    /// ```
    #[must_use]
    pub fn with_writers<O, E>(mut self, stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        self.stdout = Some(Mutex::new(Box::new(stdout)));
        self.stderr = Some(Mutex::new(Box::new(stderr)));
        self
    }

    /// Write a `[LOGGER ERROR]` diagnostic to the error stream.
    ///
    /// Failures here have nowhere left to go and are ignored.
    pub fn report(&self, message: &str) {
        let _ = self.write_line(true, &format!("[LOGGER ERROR] {}", message));
    }

    fn write_line(&self, to_stderr: bool, text: &str) -> io::Result<()> {
        let target = if to_stderr { &self.stderr } else { &self.stdout };
        match target {
            Some(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", text)?;
                writer.flush()
            }
            None if to_stderr => writeln!(io::stderr().lock(), "{}", text),
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", text)?;
                stdout.flush()
            }
        }
    }

    #[cfg(feature = "console")]
    fn decorate(&self, entry: &LogEntry<'_>) -> String {
        use colored::Colorize;

        let tag = format!("[{}]", entry.level);
        let colored_tag = tag.color(entry.level.color_code()).to_string();
        entry.line.replacen(&tag, &colored_tag, 1)
    }

    #[cfg(not(feature = "console"))]
    fn decorate(&self, entry: &LogEntry<'_>) -> String {
        entry.line.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, entry: &LogEntry<'_>) -> Result<()> {
        let to_stderr = entry.level.is_diagnostic();
        let result = if self.use_colors {
            self.write_line(to_stderr, &self.decorate(entry))
        } else {
            self.write_line(to_stderr, entry.line)
        };
        result.map_err(|e| LoggerError::writer(format!("console write failed: {}", e)))
    }
}

/// Cloneable in-memory writer; every clone sees the same bytes.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
