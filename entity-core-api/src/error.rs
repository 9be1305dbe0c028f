use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Primary key already assigned: {0}")]
    KeyAlreadyAssigned(String),

    #[error("Modification time would move backwards: stored {stored}, attempted {attempted}")]
    ModificationTimeRegression {
        stored: DateTime<Utc>,
        attempted: DateTime<Utc>,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type EntityResult<T> = Result<T, EntityError>;
