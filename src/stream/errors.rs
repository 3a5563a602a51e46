//! Custom error types for stream operations

use std::fmt;
use std::io;

/// Stream-specific error types
#[derive(Debug)]
pub enum StreamError {
    /// I/O error raised by an underlying reader
    IoError(io::Error),
    /// An argument was rejected, e.g. a non-readable member of a composite
    InvalidArgument(String),
    /// The stream does not support the requested operation
    Unsupported(String),
    /// The underlying resource was closed or detached
    Detached,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::IoError(e) => write!(f, "I/O error: {}", e),
            StreamError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            StreamError::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
            StreamError::Detached => write!(f, "Stream is detached"),
            StreamError::GenericError(msg) => write!(f, "Stream error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(error: io::Error) -> Self {
        StreamError::IoError(error)
    }
}

impl From<StreamError> for io::Error {
    fn from(error: StreamError) -> Self {
        match error {
            StreamError::IoError(e) => e,
            StreamError::InvalidArgument(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            StreamError::Unsupported(msg) => io::Error::new(io::ErrorKind::Unsupported, msg),
            StreamError::Detached => io::Error::new(io::ErrorKind::NotConnected, "stream is detached"),
            StreamError::GenericError(msg) => io::Error::new(io::ErrorKind::Other, msg),
        }
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
