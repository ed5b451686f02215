//! Vestibule Store Crate
//!
//! This crate provides the record stores backing the Vestibule platform,
//! including connection management, migrations, and the invite repository.

use sqlx::SqlitePool;
use vestibule_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod token;
pub mod types;

pub use connection::{prepare_database, DatabaseConnection};
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::InviteRepository;

// Re-export entities
pub use entities::invite::{CreateInviteRequest, OrgInvite};

// Re-export token generation
pub use token::{SecureTokenGenerator, TokenGenerator, TOKEN_LEN};

// Re-export types
pub use types::{
    errors::{DatabaseError, InviteError},
    DatabaseResult, InviteResult,
};

/// Re-export commonly used types for convenience
pub use sqlx::Pool;

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}

/// Registry owning the backend connection and the record stores bound to it.
///
/// Construction connects, migrates, and hands each store its table handle.
/// Any step failing is propagated to the caller, a registry is never handed
/// out half-wired.
pub struct Stores {
    conn: DatabaseConnection,
    pub invites: InviteRepository,
}

impl Stores {
    /// Open the registry against the configured backend
    pub async fn open(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let pool = initialize_database(config).await?;
        Ok(Self::from_pool(pool))
    }

    /// Build the registry from an already-migrated pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        let conn = DatabaseConnection::from_pool(pool.clone());
        let invites = InviteRepository::new(pool);
        Self { conn, invites }
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        self.conn.pool()
    }

    /// Close the registry's backend connection
    pub async fn close(self) {
        self.conn.close().await;
    }
}
