//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use crate::application::authenticate::AuthGate;
use crate::application::sign_out::SignOutUseCase;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::MeResponse;
use crate::presentation::middleware::{CurrentUser, extract_token};

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
///
/// Always clears the cookie. A token that is already unusable has nothing
/// to revoke; a store failure is reported so the client knows the token
/// may still be live.
pub async fn sign_out<U, R>(
    State(gate): State<AuthGate<U, R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    let token = extract_token(&headers, gate.cookie_name());
    let clear_cookie = gate.config().token_cookie().build_delete_cookie();

    match SignOutUseCase::new(gate).execute(token.as_deref()).await {
        Ok(_) => {}
        Err(e) if e.is_rejection() => {}
        Err(e) => return Err(e),
    }

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, clear_cookie)]))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> Json<MeResponse> {
    Json(MeResponse::from(&user))
}
