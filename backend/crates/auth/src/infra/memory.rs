//! In-Memory Backends
//!
//! Process-local identity store and revocation registry. Used by tests and
//! by single-instance deployments that accept losing revocations on restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::domain::value_object::revocation_key::RevocationKey;
use crate::error::AuthResult;

/// Revocation registry keyed by token hash, value is expiry (Unix ms)
#[derive(Debug, Clone, Default)]
pub struct MemoryRevocationRegistry {
    entries: Arc<RwLock<HashMap<RevocationKey, i64>>>,
}

impl MemoryRevocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let now_ms = Utc::now().timestamp_millis();
        self.entries
            .read()
            .await
            .values()
            .filter(|&&exp| exp > now_ms)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl RevocationRegistry for MemoryRevocationRegistry {
    async fn revoke(&self, key: &RevocationKey, ttl: Duration) -> AuthResult<()> {
        if ttl.is_zero() {
            return Ok(());
        }
        let now_ms = Utc::now().timestamp_millis();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_ms = now_ms.saturating_add(ttl_ms);

        let mut entries = self.entries.write().await;
        entries.retain(|_, &mut exp| exp > now_ms);
        let entry = entries.entry(*key).or_insert(expires_at_ms);
        *entry = (*entry).max(expires_at_ms);
        Ok(())
    }

    async fn is_revoked(&self, key: &RevocationKey) -> AuthResult<bool> {
        let now_ms = Utc::now().timestamp_millis();
        let entries = self.entries.read().await;
        Ok(entries.get(key).is_some_and(|&exp| exp > now_ms))
    }
}

/// Identity store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.user_id, user);
    }

    pub async fn remove(&self, user_id: &UserId) -> Option<User> {
        self.users.write().await.remove(user_id)
    }
}

impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke_then_check() {
        let registry = MemoryRevocationRegistry::new();
        let key = RevocationKey::of("a.b");
        assert!(!registry.is_revoked(&key).await.unwrap());

        registry.revoke(&key, Duration::from_secs(60)).await.unwrap();
        assert!(registry.is_revoked(&key).await.unwrap());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_is_noop() {
        let registry = MemoryRevocationRegistry::new();
        let key = RevocationKey::of("a.b");
        registry.revoke(&key, Duration::ZERO).await.unwrap();
        assert!(!registry.is_revoked(&key).await.unwrap());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_entry_expires_with_token() {
        let registry = MemoryRevocationRegistry::new();
        let key = RevocationKey::of("short.lived");
        registry.revoke(&key, Duration::from_millis(20)).await.unwrap();
        assert!(registry.is_revoked(&key).await.unwrap());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(!registry.is_revoked(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent_and_never_shortens() {
        let registry = MemoryRevocationRegistry::new();
        let key = RevocationKey::of("x.y");
        registry.revoke(&key, Duration::from_secs(600)).await.unwrap();
        registry.revoke(&key, Duration::from_millis(1)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(registry.is_revoked(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_user_repository() {
        let repo = MemoryUserRepository::new();
        let user = User::new(UserId::new());
        let id = user.user_id;
        repo.insert(user.clone()).await;

        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(user));
        repo.remove(&id).await;
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }
}
