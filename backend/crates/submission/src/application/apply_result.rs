//! Apply Result Use Case
//!
//! Records a judge outcome. The pending to terminal transition is a single
//! compare-and-set in the repository; this layer only validates the outcome
//! first so an inconsistent report never reaches storage.
//!
//! A rejected report is still classified against the ledger: an unknown id
//! is `NotFound` and a settled record is `AlreadyJudged`, whatever the
//! report says.

use std::sync::Arc;

use kernel::id::SubmissionId;

use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::error::{SubmissionError, SubmissionResult};

pub struct ApplyResultUseCase<S>
where
    S: SubmissionRepository,
{
    repo: Arc<S>,
}

impl<S> ApplyResultUseCase<S>
where
    S: SubmissionRepository,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        submission_id: &SubmissionId,
        outcome: &JudgeOutcome,
    ) -> SubmissionResult<Submission> {
        if let Err(e) = outcome.validate() {
            let e = match self.repo.find_by_id(submission_id).await? {
                None => SubmissionError::NotFound,
                Some(existing) if !existing.is_pending() => SubmissionError::AlreadyJudged,
                Some(_) => e,
            };
            tracing::warn!(
                submission_id = %submission_id,
                error = %e,
                "Judge report rejected"
            );
            return Err(e);
        }

        match self.repo.complete(submission_id, outcome).await {
            Ok(submission) => {
                tracing::info!(
                    submission_id = %submission_id,
                    status = %submission.status,
                    runtime = submission.runtime,
                    memory = submission.memory,
                    passed = submission.test_cases_passed,
                    total = submission.test_cases_total,
                    "Submission judged"
                );
                Ok(submission)
            }
            Err(SubmissionError::AlreadyJudged) => {
                tracing::warn!(submission_id = %submission_id, "Duplicate judge report");
                Err(SubmissionError::AlreadyJudged)
            }
            Err(e) => Err(e),
        }
    }
}
