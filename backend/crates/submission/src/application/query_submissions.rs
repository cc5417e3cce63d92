//! Query Submissions Use Case
//!
//! Reads are allowed in every state. Over HTTP a user only sees their own
//! submissions; someone else's id answers `NotFound`.

use std::sync::Arc;

use kernel::id::{ProblemId, SubmissionId, UserId};

use crate::application::config::SubmissionConfig;
use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::error::{SubmissionError, SubmissionResult};

pub struct QuerySubmissionsUseCase<S>
where
    S: SubmissionRepository,
{
    repo: Arc<S>,
    config: Arc<SubmissionConfig>,
}

impl<S> QuerySubmissionsUseCase<S>
where
    S: SubmissionRepository,
{
    pub fn new(repo: Arc<S>, config: Arc<SubmissionConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn get_by_id(&self, submission_id: &SubmissionId) -> SubmissionResult<Submission> {
        self.repo
            .find_by_id(submission_id)
            .await?
            .ok_or(SubmissionError::NotFound)
    }

    /// Like `get_by_id`, restricted to the viewer's own submissions
    pub async fn get_owned(
        &self,
        viewer: &UserId,
        submission_id: &SubmissionId,
    ) -> SubmissionResult<Submission> {
        let submission = self.get_by_id(submission_id).await?;
        if submission.user_id != *viewer {
            return Err(SubmissionError::NotFound);
        }
        Ok(submission)
    }

    pub async fn list_by_user(
        &self,
        user_id: &UserId,
        problem_id: Option<&ProblemId>,
        limit: Option<u32>,
    ) -> SubmissionResult<Vec<Submission>> {
        let limit = self.config.list_limit(limit);
        self.repo.list_by_user(user_id, problem_id, limit).await
    }
}
