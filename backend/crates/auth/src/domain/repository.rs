//! Repository Traits
//!
//! Interfaces for the two external stores the gate consults. Implementations
//! are in the infrastructure layer. Both must be individually atomic per key;
//! the gate adds no locking of its own.

use std::time::Duration;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::revocation_key::RevocationKey;
use crate::error::AuthResult;

/// Identity store (read-only from the auth side)
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}

/// Deny-list of tokens invalidated before their natural expiry
#[trait_variant::make(RevocationRegistry: Send)]
pub trait LocalRevocationRegistry {
    /// Mark a token unusable for `ttl`, which must be the token's own
    /// remaining validity. Revoking an already revoked token succeeds.
    async fn revoke(&self, key: &RevocationKey, ttl: Duration) -> AuthResult<()>;

    /// Point-in-time check; absence means "not known to be revoked"
    async fn is_revoked(&self, key: &RevocationKey) -> AuthResult<bool>;
}
