//! Repository for invite data access operations.

use crate::entities::{CreateInviteRequest, OrgInvite};
use crate::token::{SecureTokenGenerator, TokenGenerator};
use crate::types::{InviteError, InviteResult};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// How long a fresh invite stays valid. Policy constant, not caller-supplied.
const INVITE_TTL_HOURS: i64 = 48;

/// Repository for invite database operations
pub struct InviteRepository {
    pool: SqlitePool,
    tokens: Box<dyn TokenGenerator>,
}

impl InviteRepository {
    /// Create a new invite repository
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_token_generator(pool, Box::new(SecureTokenGenerator))
    }

    /// Create a repository with a caller-supplied token generator
    pub fn with_token_generator(pool: SqlitePool, tokens: Box<dyn TokenGenerator>) -> Self {
        Self { pool, tokens }
    }

    /// Get a reference to the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a new invite
    ///
    /// Generates a fresh token and stamps the expiry window. The populated
    /// record is returned so the caller can dispatch the token.
    pub async fn create(&self, request: &CreateInviteRequest) -> InviteResult<OrgInvite> {
        if request.inviter.is_empty() {
            return Err(InviteError::InvalidInput(
                "inviter public key must not be empty".to_string(),
            ));
        }
        require_non_empty(&request.org, "org")?;
        require_non_empty(&request.email, "email")?;

        let token = self.tokens.generate();
        let created_at = chrono::Utc::now();
        let expires_at = created_at + chrono::Duration::hours(INVITE_TTL_HOURS);
        let created_at_str = created_at.to_rfc3339();
        let expires_at_str = expires_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO org_invites (token, inviter, org, email, created_at, expires_at, accepted)
             VALUES (?, ?, ?, ?, ?, ?, false)",
        )
        .bind(&token)
        .bind(request.inviter.as_slice())
        .bind(&request.org)
        .bind(&request.email)
        .bind(&created_at_str)
        .bind(&expires_at_str)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        info!(
            token = %token,
            org = %request.org,
            email = %request.email,
            "created org invite"
        );

        Ok(OrgInvite {
            token,
            inviter: request.inviter.clone(),
            org: request.org.clone(),
            email: request.email.clone(),
            created_at: created_at_str,
            expires_at: expires_at_str,
            accepted: false,
        })
    }

    /// Get an invite by token
    ///
    /// Does not check expiry, callers inspect `expires_at` and `accepted`
    /// themselves.
    pub async fn get(&self, token: &str) -> InviteResult<OrgInvite> {
        let row = sqlx::query(
            "SELECT token, inviter, org, email, created_at, expires_at, accepted
             FROM org_invites WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Err(InviteError::InviteNotFound);
        };

        Ok(OrgInvite {
            token: row.try_get("token").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            inviter: row.try_get("inviter").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            org: row.try_get("org").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            email: row.try_get("email").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            created_at: row.try_get("created_at").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            expires_at: row.try_get("expires_at").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
            accepted: row.try_get("accepted").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
        })
    }

    /// List all invites for an email, in any state
    pub async fn list_by_email(&self, email: &str) -> InviteResult<Vec<OrgInvite>> {
        let rows = sqlx::query(
            "SELECT token, inviter, org, email, created_at, expires_at, accepted
             FROM org_invites WHERE email = ?",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        let invites = rows
            .into_iter()
            .map(|row| {
                Ok(OrgInvite {
                    token: row.try_get("token").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    inviter: row.try_get("inviter").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    org: row.try_get("org").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    email: row.try_get("email").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    created_at: row.try_get("created_at").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    expires_at: row.try_get("expires_at").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                    accepted: row.try_get("accepted").map_err(|e| InviteError::DatabaseError(e.to_string()))?,
                })
            })
            .collect::<Result<Vec<_>, InviteError>>()?;

        Ok(invites)
    }

    /// Accept an invite
    ///
    /// Flips the accepted flag for the matching record. Expired or
    /// already-accepted invites are not rejected here, enforcement belongs to
    /// the caller.
    pub async fn accept(&self, token: &str) -> InviteResult<()> {
        require_non_empty(token, "token")?;

        let result = sqlx::query("UPDATE org_invites SET accepted = true WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(InviteError::InviteNotFound);
        }

        info!(token = %token, "accepted org invite");
        Ok(())
    }

    /// Delete an invite by token
    ///
    /// Succeeds whether or not a record matched, so deletion is idempotent.
    pub async fn delete(&self, token: &str) -> InviteResult<()> {
        require_non_empty(token, "token")?;

        let result = sqlx::query("DELETE FROM org_invites WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        info!(
            token = %token,
            removed = result.rows_affected(),
            "deleted org invite"
        );
        Ok(())
    }

    /// Delete all invites issued by an inviter
    pub async fn delete_by_inviter(&self, inviter: &[u8]) -> InviteResult<()> {
        if inviter.is_empty() {
            return Err(InviteError::InvalidInput(
                "inviter public key must not be empty".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM org_invites WHERE inviter = ?")
            .bind(inviter)
            .execute(&self.pool)
            .await
            .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        info!(removed = result.rows_affected(), "deleted invites by inviter");
        Ok(())
    }

    /// Delete all invites for an org
    pub async fn delete_by_org(&self, org: &str) -> InviteResult<()> {
        require_non_empty(org, "org")?;

        let result = sqlx::query("DELETE FROM org_invites WHERE org = ?")
            .bind(org)
            .execute(&self.pool)
            .await
            .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        info!(
            org = %org,
            removed = result.rows_affected(),
            "deleted invites by org"
        );
        Ok(())
    }

    /// Delete all invites matching both an inviter and an org
    pub async fn delete_by_inviter_and_org(&self, inviter: &[u8], org: &str) -> InviteResult<()> {
        if inviter.is_empty() {
            return Err(InviteError::InvalidInput(
                "inviter public key must not be empty".to_string(),
            ));
        }
        require_non_empty(org, "org")?;

        let result = sqlx::query("DELETE FROM org_invites WHERE inviter = ? AND org = ?")
            .bind(inviter)
            .bind(org)
            .execute(&self.pool)
            .await
            .map_err(|e| InviteError::DatabaseError(e.to_string()))?;

        info!(
            org = %org,
            removed = result.rows_affected(),
            "deleted invites by inviter and org"
        );
        Ok(())
    }
}

fn require_non_empty(value: &str, field: &str) -> InviteResult<()> {
    if value.trim().is_empty() {
        return Err(InviteError::InvalidInput(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

fn map_write_error(e: sqlx::Error) -> InviteError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => InviteError::DuplicateToken,
        _ => InviteError::DatabaseError(e.to_string()),
    }
}
