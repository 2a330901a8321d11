//! Error types and handling for backplan
//!
//! The planner arithmetic itself is infallible; errors arise only at the
//! configuration and I/O boundary. This module provides the shared error
//! enum those boundaries map into.

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Low severity - operation can continue
    Low,
    /// Medium severity - operation should be retried
    Medium,
    /// High severity - operation should be aborted
    High,
}

/// Main error type for backplan operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the severity of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config { .. } => ErrorSeverity::High,
            Self::Io { .. } => ErrorSeverity::Medium,
            Self::Other { .. } => ErrorSeverity::Low,
        }
    }

    /// Whether the operation that produced this error can continue
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::High
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
