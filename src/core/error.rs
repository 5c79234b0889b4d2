//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Could not reserve memory for a rendered record
    #[error("Resource exhausted: could not reserve {requested} bytes")]
    ResourceExhausted { requested: usize },

    /// Log file could not be opened, locked or written
    #[error("Failed to append to log file '{path}': {source}")]
    SinkUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Ordinal outside the severity enumeration
    #[error("Invalid severity ordinal: {0}")]
    InvalidSeverity(u8),

    /// Logger used after it was disposed
    #[error("Logger handle is not initialized or was already disposed")]
    NullHandle,

    /// Argument rejected by a configuration setter
    #[error("Invalid argument for {component}: {message}")]
    InvalidArgument { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a resource exhaustion error
    pub fn resource_exhausted(requested: usize) -> Self {
        LoggerError::ResourceExhausted { requested }
    }

    /// Create a sink unavailable error for a file path
    pub fn sink_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
