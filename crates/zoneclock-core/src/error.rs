//! Error types for the zoneclock library.

use thiserror::Error;

/// Comprehensive error type for all clock and conversion operations.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// A timezone identifier that the catalog does not know
    #[error("Unknown timezone '{id}'; run `zc zones` for the supported list")]
    UnknownZone { id: String },

    /// Errors raised by the underlying timezone/calendar engine
    #[error("Time computation error: {message}")]
    Time {
        message: String,
        #[source]
        source: jiff::Error,
    },

    /// Serialization errors for JSON output
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ClockError {
        ClockError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ClockError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown-zone error for an identifier outside the catalog.
    pub fn unknown_zone(id: impl Into<String>) -> Self {
        ClockError::UnknownZone { id: id.into() }
    }
}

/// Specialized extension trait for time-engine Results.
pub trait TimeResultExt<T> {
    /// Map timezone/calendar engine errors with a message.
    fn time_context(self, message: &str) -> Result<T>;
}

impl<T> TimeResultExt<T> for std::result::Result<T, jiff::Error> {
    fn time_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ClockError::Time {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for clock operations
pub type Result<T> = std::result::Result<T, ClockError>;
