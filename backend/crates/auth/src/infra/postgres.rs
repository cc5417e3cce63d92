//! PostgreSQL Repository Implementations

use std::time::Duration;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::domain::value_object::revocation_key::RevocationKey;
use crate::domain::value_object::user_status::UserStatus;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed identity store and revocation registry
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Drop revocation entries whose token has expired anyway
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(entries_deleted = deleted, "Cleaned up expired revocation entries");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_status,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Revocation Registry Implementation
// ============================================================================

impl RevocationRegistry for PgAuthRepository {
    async fn revoke(&self, key: &RevocationKey, ttl: Duration) -> AuthResult<()> {
        if ttl.is_zero() {
            return Ok(());
        }
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_ms = Utc::now().timestamp_millis().saturating_add(ttl_ms);

        // A repeated revoke never shortens an existing entry.
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_hash, expires_at_ms)
            VALUES ($1, $2)
            ON CONFLICT (token_hash) DO UPDATE
            SET expires_at_ms = GREATEST(revoked_tokens.expires_at_ms, EXCLUDED.expires_at_ms)
            "#,
        )
        .bind(key.as_bytes().as_slice())
        .bind(expires_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_revoked(&self, key: &RevocationKey) -> AuthResult<bool> {
        let now_ms = Utc::now().timestamp_millis();

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_hash = $1 AND expires_at_ms > $2)",
        )
        .bind(key.as_bytes().as_slice())
        .bind(now_ms)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_status = UserStatus::from_id(self.user_status).ok_or_else(|| {
            AuthError::Internal(format!("Invalid user_status id: {}", self.user_status))
        })?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            user_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
