//! Error types for the shelter records tool
//!
//! Separates the faults an operator can recover from (bad input, unknown
//! animal) from faults that end the session.

use thiserror::Error;

/// Main error type for the shelter records tool
#[derive(Error, Debug)]
pub enum ShelterError {
    /// A record was rejected before insertion
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// No record matches the requested name
    #[error("Animal not found in records: '{name}'")]
    NotFound { name: String },

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {operation} failed")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Input ended while a prompt was still waiting for an answer
    #[error("Input closed before an answer was given")]
    InputClosed,
}

impl ShelterError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a new I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Whether the command loop may report this error and keep going
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShelterError>;
