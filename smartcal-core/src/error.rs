//! Error types for SmartCal.

use thiserror::Error;

/// Errors that can occur in SmartCal operations.
#[derive(Error, Debug)]
pub enum SmartCalError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Could not persist state: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for SmartCal operations.
pub type SmartCalResult<T> = Result<T, SmartCalError>;
