//! Create Submission Use Case

use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::ProblemId;

use crate::application::config::SubmissionConfig;
use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::language::Language;
use crate::error::{SubmissionError, SubmissionResult};

/// Input DTO for create submission
#[derive(Debug, Clone)]
pub struct CreateSubmissionInput {
    pub problem_id: ProblemId,
    pub source_code: String,
    /// Raw tag as sent by the client
    pub language: String,
}

/// Create Submission Use Case
pub struct CreateSubmissionUseCase<S>
where
    S: SubmissionRepository,
{
    repo: Arc<S>,
    config: Arc<SubmissionConfig>,
}

impl<S> CreateSubmissionUseCase<S>
where
    S: SubmissionRepository,
{
    pub fn new(repo: Arc<S>, config: Arc<SubmissionConfig>) -> Self {
        Self { repo, config }
    }

    /// The author always comes from the authenticated identity.
    pub async fn execute(
        &self,
        author: &CurrentUser,
        input: CreateSubmissionInput,
    ) -> SubmissionResult<Submission> {
        if author.user_status.is_blocked() {
            return Err(SubmissionError::Forbidden);
        }

        let language = Language::from_code(&input.language).ok_or_else(|| {
            SubmissionError::UnsupportedLanguage(input.language.chars().take(32).collect())
        })?;

        if input.source_code.trim().is_empty() {
            return Err(SubmissionError::InvalidSource("source code is empty"));
        }
        if input.source_code.len() > self.config.max_source_bytes {
            return Err(SubmissionError::InvalidSource("source code is too large"));
        }

        let submission = Submission::new(
            author.user_id,
            input.problem_id,
            input.source_code,
            language,
        );
        self.repo.create(&submission).await?;

        tracing::info!(
            submission_id = %submission.submission_id,
            user_id = %submission.user_id,
            problem_id = %submission.problem_id,
            language = %submission.language,
            "Submission created"
        );

        Ok(submission)
    }
}
