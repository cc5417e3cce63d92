//! HTTP Handlers

use std::sync::Arc;

use auth::CurrentUser;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::id::SubmissionId;

use crate::application::config::SubmissionConfig;
use crate::application::{
    ApplyResultUseCase, CreateSubmissionInput, CreateSubmissionUseCase, QuerySubmissionsUseCase,
};
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::error::SubmissionResult;
use crate::presentation::dto::{
    CreateSubmissionRequest, JudgeReportRequest, ListSubmissionsQuery, SubmissionResponse,
    SubmissionSummary,
};

/// Shared state for submission handlers
pub struct SubmissionAppState<S> {
    pub repo: Arc<S>,
    pub config: Arc<SubmissionConfig>,
}

impl<S> Clone for SubmissionAppState<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Client routes (authenticated)
// ============================================================================

/// POST /api/submissions
pub async fn create<S>(
    State(state): State<SubmissionAppState<S>>,
    user: CurrentUser,
    Json(req): Json<CreateSubmissionRequest>,
) -> SubmissionResult<(StatusCode, Json<SubmissionResponse>)>
where
    S: SubmissionRepository + Send + Sync + 'static,
{
    let use_case = CreateSubmissionUseCase::new(state.repo.clone(), state.config.clone());

    let input = CreateSubmissionInput {
        problem_id: req.problem_id,
        source_code: req.code,
        language: req.language,
    };

    let submission = use_case.execute(&user, input).await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// GET /api/submissions
pub async fn list<S>(
    State(state): State<SubmissionAppState<S>>,
    user: CurrentUser,
    Query(query): Query<ListSubmissionsQuery>,
) -> SubmissionResult<Json<Vec<SubmissionSummary>>>
where
    S: SubmissionRepository + Send + Sync + 'static,
{
    let use_case = QuerySubmissionsUseCase::new(state.repo.clone(), state.config.clone());

    let submissions = use_case
        .list_by_user(&user.user_id, query.problem_id.as_ref(), query.limit)
        .await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// GET /api/submissions/{id}
pub async fn get<S>(
    State(state): State<SubmissionAppState<S>>,
    user: CurrentUser,
    Path(submission_id): Path<SubmissionId>,
) -> SubmissionResult<Json<SubmissionResponse>>
where
    S: SubmissionRepository + Send + Sync + 'static,
{
    let use_case = QuerySubmissionsUseCase::new(state.repo.clone(), state.config.clone());
    let submission = use_case.get_owned(&user.user_id, &submission_id).await?;
    Ok(Json(submission.into()))
}

// ============================================================================
// Judge route
// ============================================================================

/// POST /api/submissions/{id}/result
pub async fn apply_result<S>(
    State(state): State<SubmissionAppState<S>>,
    Path(submission_id): Path<SubmissionId>,
    Json(req): Json<JudgeReportRequest>,
) -> SubmissionResult<Json<SubmissionResponse>>
where
    S: SubmissionRepository + Send + Sync + 'static,
{
    let use_case = ApplyResultUseCase::new(state.repo.clone());
    let outcome = JudgeOutcome::from(req);
    let submission = use_case.execute(&submission_id, &outcome).await?;
    Ok(Json(submission.into()))
}
