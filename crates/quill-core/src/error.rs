//! Domain-level error types.

use thiserror::Error;

/// Service-level outcomes for post operations.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Missing required field: {0}")]
    MissingFields(&'static str),

    #[error("No fields provided for update")]
    NoFieldsProvided,

    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Password verification failed")]
    Forbidden,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(StoreError),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Malformed identifier: {0}")]
    InvalidId(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
