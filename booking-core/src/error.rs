//! Error types for the booking tool.

use thiserror::Error;

use crate::appointment::Field;

/// Errors that can occur in booking operations.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown view mode '{0}'. Expected 'list' or 'calendar'")]
    UnknownViewMode(String),

    #[error("No appointment id left after {0}")]
    IdsExhausted(u64),

    #[error("Unsupported locale '{0}'")]
    UnsupportedLocale(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
