//! Invite entity definitions

use serde::{Deserialize, Serialize};

/// A pending or resolved organization invitation.
///
/// The token doubles as the primary key and the shareable link component.
/// Timestamps are RFC 3339 strings; `expires_at` is derived from `created_at`
/// at creation time and never changes afterwards. An invite past its
/// `expires_at` is still returned by lookups, expiry is interpreted by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgInvite {
    pub token: String,
    pub inviter: Vec<u8>,
    pub org: String,
    pub email: String,
    pub created_at: String,
    pub expires_at: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInviteRequest {
    pub inviter: Vec<u8>,
    pub org: String,
    pub email: String,
}
