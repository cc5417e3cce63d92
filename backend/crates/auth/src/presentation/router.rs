//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::application::authenticate::AuthGate;
use crate::domain::repository::{RevocationRegistry, UserRepository};
use crate::presentation::handlers;
use crate::presentation::middleware::require_auth;

/// Create the Auth router for any identity store / registry pair
pub fn auth_router<U, R>(gate: AuthGate<U, R>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(from_fn_with_state(gate.clone(), require_auth::<U, R>));

    Router::new()
        .route("/signout", post(handlers::sign_out::<U, R>))
        .merge(protected)
        .with_state(gate)
}
