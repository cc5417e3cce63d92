//! Judge Middleware
//!
//! Guards the result-reporting route. The judge is a service, not a user,
//! so it presents a shared secret instead of a session token.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::repository::SubmissionRepository;
use crate::error::SubmissionError;
use crate::presentation::handlers::SubmissionAppState;

/// Header carrying the judge's shared secret
pub const JUDGE_TOKEN_HEADER: &str = "x-judge-token";

/// Middleware that requires the judge secret
pub async fn require_judge<S>(
    State(state): State<SubmissionAppState<S>>,
    req: Request,
    next: Next,
) -> Result<Response, SubmissionError>
where
    S: SubmissionRepository + Send + Sync + 'static,
{
    let presented = req
        .headers()
        .get(JUDGE_TOKEN_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    if !state.config.judge_credential_matches(presented) {
        return Err(SubmissionError::JudgeUnauthorized);
    }

    Ok(next.run(req).await)
}
