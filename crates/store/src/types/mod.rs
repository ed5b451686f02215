//! Shared types and result types for the store layer

pub mod errors;

// Re-export common types
pub use errors::{DatabaseError, InviteError};

// Common result types
pub type DatabaseResult<T> = Result<T, DatabaseError>;
pub type InviteResult<T> = Result<T, InviteError>;

// Re-export request types from entities
pub use crate::entities::CreateInviteRequest;
