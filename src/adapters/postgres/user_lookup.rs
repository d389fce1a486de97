//! PostgreSQL implementation of UserLookup.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserLookup;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of the UserLookup port.
///
/// Existence checks only; the user profile itself belongs to another service.
pub struct PostgresUserLookup {
    pool: PgPool,
}

impl PostgresUserLookup {
    /// Creates a new PostgresUserLookup with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PostgresUserLookup {
    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check user existence: {}", e),
                    )
                })?;

        Ok(exists)
    }
}
