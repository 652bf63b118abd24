//! Error types for Campus Secretary.

use thiserror::Error;

/// Errors that can occur in Campus Secretary operations.
#[derive(Error, Debug)]
pub enum SecretaryError {
    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Day {day} is outside 1-{days_in_month} for {year}-{month}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        days_in_month: u32,
    },

    #[error("Invalid color '{0}'. Expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid participant group '{0}'. Expected Department, Office or All")]
    InvalidParticipants(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SecretaryError {
    fn from(err: serde_json::Error) -> Self {
        SecretaryError::Serialization(err.to_string())
    }
}

/// Result type alias for Campus Secretary operations.
pub type SecretaryResult<T> = Result<T, SecretaryError>;
