//! Repository Traits
//!
//! Interface for submission persistence. Implementation is in infrastructure layer.

use kernel::id::{ProblemId, SubmissionId, UserId};

use crate::domain::entity::submission::Submission;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::error::SubmissionResult;

/// Submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Persist a new pending submission
    async fn create(&self, submission: &Submission) -> SubmissionResult<()>;

    /// Find submission by ID
    async fn find_by_id(&self, submission_id: &SubmissionId) -> SubmissionResult<Option<Submission>>;

    /// A user's submissions, newest first, optionally for one problem
    async fn list_by_user(
        &self,
        user_id: &UserId,
        problem_id: Option<&ProblemId>,
        limit: u32,
    ) -> SubmissionResult<Vec<Submission>>;

    /// Apply a judge outcome atomically (compare-and-set on `pending`)
    ///
    /// Exactly one of several concurrent calls on the same id succeeds; the
    /// rest fail with `AlreadyJudged`. Unknown ids fail with `NotFound`.
    async fn complete(
        &self,
        submission_id: &SubmissionId,
        outcome: &JudgeOutcome,
    ) -> SubmissionResult<Submission>;
}
