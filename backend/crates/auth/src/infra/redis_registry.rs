//! Redis Revocation Registry
//!
//! One key per revoked token with a native TTL, so entries vanish exactly
//! when the token would have expired anyway.

use std::time::Duration;

use redis::AsyncCommands as _;
use redis::aio::ConnectionManager;

use crate::domain::repository::RevocationRegistry;
use crate::domain::value_object::revocation_key::RevocationKey;
use crate::error::AuthResult;

const KEY_PREFIX: &str = "token:";

/// Redis-backed revocation registry
#[derive(Clone)]
pub struct RedisRevocationRegistry {
    conn: ConnectionManager,
}

impl RedisRevocationRegistry {
    pub async fn connect(url: &str) -> AuthResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    pub fn from_manager(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    fn redis_key(key: &RevocationKey) -> String {
        format!("{KEY_PREFIX}{}", key.to_hex())
    }
}

impl RevocationRegistry for RedisRevocationRegistry {
    async fn revoke(&self, key: &RevocationKey, ttl: Duration) -> AuthResult<()> {
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        if ttl_ms == 0 {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        conn.pset_ex::<_, _, ()>(Self::redis_key(key), 1u8, ttl_ms)
            .await?;
        Ok(())
    }

    async fn is_revoked(&self, key: &RevocationKey) -> AuthResult<bool> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(Self::redis_key(key)).await?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let key = RevocationKey::of("some.token");
        let redis_key = RedisRevocationRegistry::redis_key(&key);
        assert!(redis_key.starts_with("token:"));
        assert_eq!(redis_key.len(), "token:".len() + 64);
        assert!(!redis_key.contains("some.token"));
    }
}
