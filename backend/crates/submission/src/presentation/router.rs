//! Submission Router

use std::sync::Arc;

use auth::application::AuthGate;
use auth::domain::repository::{RevocationRegistry, UserRepository};
use auth::require_auth;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::application::config::SubmissionConfig;
use crate::domain::repository::SubmissionRepository;
use crate::presentation::handlers::{self, SubmissionAppState};
use crate::presentation::middleware::require_judge;

/// Create the Submission router
///
/// Client routes sit behind the auth gate; the result route sits behind the
/// judge secret instead.
pub fn submission_router<S, U, R>(repo: S, config: SubmissionConfig, gate: AuthGate<U, R>) -> Router
where
    S: SubmissionRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    R: RevocationRegistry + Send + Sync + 'static,
{
    let state = SubmissionAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let client = Router::new()
        .route("/", post(handlers::create::<S>).get(handlers::list::<S>))
        .route("/{id}", get(handlers::get::<S>))
        .route_layer(from_fn_with_state(gate, require_auth::<U, R>));

    let judge = Router::new()
        .route("/{id}/result", post(handlers::apply_result::<S>))
        .route_layer(from_fn_with_state(state.clone(), require_judge::<S>));

    client.merge(judge).with_state(state)
}
