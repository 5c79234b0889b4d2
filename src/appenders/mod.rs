//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, SharedBuffer};
pub use file::{append_to_file, FileAppender};

// Re-export trait for convenience
pub use crate::core::Appender;
