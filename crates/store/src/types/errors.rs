//! Error types for the store layer

use thiserror::Error;

/// General database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// Invite-specific store errors
#[derive(Debug, Error)]
pub enum InviteError {
    #[error("Invite not found")]
    InviteNotFound,

    #[error("Duplicate invite token")]
    DuplicateToken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
