//! Issue Token Use Case
//!
//! Mints a session token for an existing identity. Credential checks belong
//! to the sign-in flow that calls this; no HTTP route exposes it directly.

use std::sync::Arc;

use kernel::id::UserId;
use platform::deadline::within;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token_codec::TokenCodec;
use crate::error::{AuthError, AuthResult};

/// Issue token output
#[derive(Debug, Clone)]
pub struct IssueTokenOutput {
    pub token: String,
    pub expires_at_ms: i64,
}

/// Issue token use case
pub struct IssueTokenUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
}

impl<U> IssueTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let codec = TokenCodec::new(config.signing_key.clone());
        Self {
            users,
            codec,
            config,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<IssueTokenOutput> {
        let user = within(self.config.store_timeout, self.users.find_by_id(user_id))
            .await
            .map_err(|_| AuthError::StoreUnavailable("identity store"))??
            .ok_or(AuthError::UserNotFound)?;

        if user.is_blocked() {
            return Err(AuthError::AccountBlocked);
        }

        let issued = self
            .codec
            .issue(&user.user_id, self.config.token_ttl)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {e}")))?;

        let expires_at_ms = issued.expires_at_ms();
        tracing::info!(user_id = %user.user_id, expires_at_ms, "Token issued");

        Ok(IssueTokenOutput {
            token: issued.token,
            expires_at_ms,
        })
    }
}
