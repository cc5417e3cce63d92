//! In-Memory Repository Implementation
//!
//! The check and the write of `complete` happen under one lock, which gives
//! the same compare-and-set guarantee as the PostgreSQL `UPDATE ... WHERE`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{ProblemId, SubmissionId, UserId};
use tokio::sync::Mutex;

use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::error::{SubmissionError, SubmissionResult};

#[derive(Debug, Clone, Default)]
pub struct MemorySubmissionRepository {
    submissions: Arc<Mutex<HashMap<SubmissionId, Submission>>>,
}

impl MemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionRepository for MemorySubmissionRepository {
    async fn create(&self, submission: &Submission) -> SubmissionResult<()> {
        let mut submissions = self.submissions.lock().await;
        if submissions.contains_key(&submission.submission_id) {
            return Err(SubmissionError::Internal(format!(
                "duplicate submission id {}",
                submission.submission_id
            )));
        }
        submissions.insert(submission.submission_id, submission.clone());
        Ok(())
    }

    async fn find_by_id(&self, submission_id: &SubmissionId) -> SubmissionResult<Option<Submission>> {
        Ok(self.submissions.lock().await.get(submission_id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        problem_id: Option<&ProblemId>,
        limit: u32,
    ) -> SubmissionResult<Vec<Submission>> {
        let submissions = self.submissions.lock().await;
        let mut found: Vec<Submission> = submissions
            .values()
            .filter(|s| s.user_id == *user_id)
            .filter(|s| problem_id.is_none_or(|p| s.problem_id == *p))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.submission_id.cmp(&a.submission_id))
        });
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn complete(
        &self,
        submission_id: &SubmissionId,
        outcome: &JudgeOutcome,
    ) -> SubmissionResult<Submission> {
        let mut submissions = self.submissions.lock().await;
        let submission = submissions
            .get_mut(submission_id)
            .ok_or(SubmissionError::NotFound)?;
        submission.apply(outcome, Utc::now())?;
        Ok(submission.clone())
    }
}
