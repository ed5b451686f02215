//! Domain entities for the store layer
//!
//! Simplified entity definitions for use by the repository layer

pub mod invite;

// Re-export all entity types
pub use invite::{CreateInviteRequest, OrgInvite};
