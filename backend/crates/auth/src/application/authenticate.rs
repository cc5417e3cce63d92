//! Auth Gate
//!
//! Per-request admission decision. Recomputed on every call and never
//! persisted. The steps run strictly in order and stop at the first
//! failure:
//!
//! 1. token present
//! 2. signature and expiry verified
//! 3. subject present in the verified claims
//! 4. subject resolves to a user
//! 5. token not revoked
//!
//! Steps 4 and 5 are the only suspension points and each is bounded by
//! `AuthConfig::store_timeout`. A store that misses its deadline fails the
//! request closed with `StoreUnavailable`.

use std::sync::Arc;

use platform::deadline::within;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::domain::token_codec::TokenCodec;
use crate::domain::value_object::revocation_key::RevocationKey;
use crate::domain::value_object::token_claims::TokenClaims;
use crate::error::{AuthError, AuthResult};

/// Outcome of a successful admission
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub claims: TokenClaims,
    pub revocation_key: RevocationKey,
}

/// Composes codec, identity store and revocation registry
pub struct AuthGate<U, R> {
    users: Arc<U>,
    registry: Arc<R>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
}

// Manual impl: U and R sit behind Arc and need not be Clone.
impl<U, R> Clone for AuthGate<U, R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            registry: Arc::clone(&self.registry),
            codec: self.codec.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<U, R> AuthGate<U, R>
where
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, registry: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let codec = TokenCodec::new(config.signing_key.clone());
        Self {
            users,
            registry,
            codec,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn users(&self) -> &Arc<U> {
        &self.users
    }

    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.token_cookie_name
    }

    /// Run the admission steps against an optional raw token
    pub async fn authenticate(&self, token: Option<&str>) -> AuthResult<Authenticated> {
        let result = self.admit(token).await;
        if let Err(e) = &result
            && e.is_rejection()
        {
            tracing::debug!(reason = %e, "Auth gate rejected request");
        }
        result
    }

    async fn admit(&self, token: Option<&str>) -> AuthResult<Authenticated> {
        let token = token.filter(|t| !t.is_empty()).ok_or(AuthError::MissingToken)?;

        let claims = self.codec.verify(token)?;

        let user_id = claims.subject().ok_or(AuthError::InvalidToken)?;

        let user = within(self.config.store_timeout, self.users.find_by_id(&user_id))
            .await
            .map_err(|_| AuthError::StoreUnavailable("identity store"))??
            .ok_or(AuthError::UserNotFound)?;

        let revocation_key = RevocationKey::of(token);
        let revoked = within(
            self.config.store_timeout,
            self.registry.is_revoked(&revocation_key),
        )
        .await
        .map_err(|_| AuthError::StoreUnavailable("revocation registry"))??;

        if revoked {
            return Err(AuthError::InvalidToken);
        }

        Ok(Authenticated {
            user,
            claims,
            revocation_key,
        })
    }
}
