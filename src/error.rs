//! Custom error types for the worktime application
//!
//! This module provides structured error handling using thiserror,
//! replacing generic anyhow errors with specific, actionable error types.

use thiserror::Error;

/// Main error type for the worktime application
#[derive(Error, Debug)]
pub enum WorktimeError {
    /// Time format conversion errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Record data errors
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date/time parsing errors
    #[error("Date/time error: {0}")]
    DateTime(String),

    /// Generic error for backward compatibility
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the "HH:MM" / decimal-hours converter
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid time format: {0}. Expected HH:MM")]
    InvalidPattern(String),

    #[error("Negative field in time value: {0}")]
    NegativeField(String),

    #[error("Invalid minutes value: {0}. Must be between 0 and 59")]
    MinutesOutOfRange(i64),

    #[error("Cannot format negative hours: {0}")]
    NegativeHours(f64),

    #[error("Cannot format non-finite hours: {0}")]
    NonFiniteHours(f64),
}

/// Errors raised while handling record input
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Records file not found: {0}")]
    FileNotFound(String),

    #[error("Unknown day label: {0}. Expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun")]
    UnknownDayLabel(String),
}

/// Result type alias for the worktime application
pub type Result<T> = std::result::Result<T, WorktimeError>;

// Conversion from anyhow::Error for backward compatibility during migration
impl From<anyhow::Error> for WorktimeError {
    fn from(err: anyhow::Error) -> Self {
        WorktimeError::Other(err.to_string())
    }
}

// Conversion from chrono parse errors
impl From<chrono::ParseError> for WorktimeError {
    fn from(err: chrono::ParseError) -> Self {
        WorktimeError::DateTime(err.to_string())
    }
}


// Made with Bob
