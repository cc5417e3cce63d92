//! Auth Middleware
//!
//! Runs the auth gate in front of protected routes and hands the resolved
//! identity to handlers through request extensions.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use platform::cookie::{extract_bearer, extract_cookie};

use crate::application::authenticate::{AuthGate, Authenticated};
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::domain::value_object::user_status::UserStatus;
use crate::error::AuthError;

/// Identity admitted by the gate for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_status: UserStatus,
    pub token_expires_at_ms: i64,
}

impl From<&Authenticated> for CurrentUser {
    fn from(auth: &Authenticated) -> Self {
        Self {
            user_id: auth.user.user_id,
            user_status: auth.user.user_status,
            token_expires_at_ms: auth.claims.exp,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when `require_auth` ran for this route.
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}

/// Token from the named cookie, falling back to `Authorization: Bearer`
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    extract_cookie(headers, cookie_name).or_else(|| extract_bearer(headers))
}

/// Middleware that requires an admitted identity
pub async fn require_auth<U, R>(
    State(gate): State<AuthGate<U, R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), gate.cookie_name());
    let authenticated = gate.authenticate(token.as_deref()).await?;

    req.extensions_mut()
        .insert(CurrentUser::from(&authenticated));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_cookie_wins_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "token=from-cookie".parse().unwrap());
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        assert_eq!(extract_token(&headers, "token").as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        assert_eq!(extract_token(&headers, "token").as_deref(), Some("from-header"));
    }

    #[test]
    fn test_no_credential() {
        assert_eq!(extract_token(&HeaderMap::new(), "token"), None);
    }
}
