//! Sign Out Use Case
//!
//! Revokes the presented token for exactly its remaining validity.

use platform::deadline::within;

use crate::application::authenticate::AuthGate;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Sign out output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutOutput {
    /// Registry entry written
    Revoked,
    /// Token had no validity left; nothing to write
    AlreadyExpired,
}

/// Sign out use case
pub struct SignOutUseCase<U, R> {
    gate: AuthGate<U, R>,
}

impl<U, R> SignOutUseCase<U, R>
where
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    pub fn new(gate: AuthGate<U, R>) -> Self {
        Self { gate }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<SignOutOutput> {
        let authenticated = self.gate.authenticate(token).await?;

        let ttl = authenticated.claims.remaining();
        if ttl.is_zero() {
            return Ok(SignOutOutput::AlreadyExpired);
        }

        within(
            self.gate.config().store_timeout,
            self.gate
                .registry()
                .revoke(&authenticated.revocation_key, ttl),
        )
        .await
        .map_err(|_| AuthError::StoreUnavailable("revocation registry"))??;

        tracing::info!(
            user_id = %authenticated.user.user_id,
            token = %authenticated.revocation_key.fingerprint(),
            ttl_ms = ttl.as_millis() as u64,
            "Token revoked"
        );

        Ok(SignOutOutput::Revoked)
    }
}
