//! Submission Entity
//!
//! One attempt by one user at one problem. Source and language are fixed at
//! creation; the judged fields are written exactly once, together with the
//! status, by [`Submission::apply`].

use chrono::{DateTime, Utc};
use kernel::id::{ProblemId, SubmissionId, UserId};

use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::domain::value_object::language::Language;
use crate::domain::value_object::submission_status::SubmissionStatus;
use crate::error::{SubmissionError, SubmissionResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub submission_id: SubmissionId,
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub source_code: String,
    pub language: Language,
    pub status: SubmissionStatus,
    pub runtime: f64,
    pub memory: u64,
    pub error_message: String,
    pub test_cases_passed: u32,
    pub test_cases_total: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub judged_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Create a pending submission with zeroed results
    pub fn new(
        user_id: UserId,
        problem_id: ProblemId,
        source_code: String,
        language: Language,
    ) -> Self {
        let now = Utc::now();
        Self {
            submission_id: SubmissionId::new(),
            user_id,
            problem_id,
            source_code,
            language,
            status: SubmissionStatus::Pending,
            runtime: 0.0,
            memory: 0,
            error_message: String::new(),
            test_cases_passed: 0,
            test_cases_total: 0,
            created_at: now,
            updated_at: now,
            judged_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Move from pending to the reported terminal state
    ///
    /// On error nothing is modified.
    pub fn apply(&mut self, outcome: &JudgeOutcome, at: DateTime<Utc>) -> SubmissionResult<()> {
        if !self.is_pending() {
            return Err(SubmissionError::AlreadyJudged);
        }
        outcome.validate()?;

        self.status = outcome.verdict.status();
        self.runtime = outcome.runtime;
        self.memory = outcome.memory;
        self.test_cases_passed = outcome.test_cases_passed;
        self.test_cases_total = outcome.test_cases_total;
        self.error_message = outcome.stored_error_message();
        self.updated_at = at;
        self.judged_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::submission_status::Verdict;

    fn pending() -> Submission {
        Submission::new(
            UserId::new(),
            ProblemId::new(),
            "print(1)".into(),
            Language::Python,
        )
    }

    #[test]
    fn test_new_is_pending_and_zeroed() {
        let s = pending();
        assert!(s.is_pending());
        assert_eq!(s.runtime, 0.0);
        assert_eq!(s.memory, 0);
        assert_eq!(s.test_cases_passed, 0);
        assert_eq!(s.test_cases_total, 0);
        assert!(s.error_message.is_empty());
        assert!(s.judged_at.is_none());
    }

    #[test]
    fn test_apply_once() {
        let mut s = pending();
        let outcome = JudgeOutcome {
            verdict: Verdict::Error,
            runtime: 1.5,
            memory: 64,
            test_cases_passed: 2,
            test_cases_total: 5,
            error_message: Some("Runtime error".into()),
        };
        s.apply(&outcome, Utc::now()).unwrap();
        assert_eq!(s.status, SubmissionStatus::Error);
        assert_eq!(s.error_message, "Runtime error");
        assert!(s.judged_at.is_some());

        let before = s.clone();
        assert!(matches!(
            s.apply(&outcome, Utc::now()),
            Err(SubmissionError::AlreadyJudged)
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_rejected_outcome_leaves_record_untouched() {
        let mut s = pending();
        let before = s.clone();
        let outcome = JudgeOutcome {
            verdict: Verdict::Accepted,
            runtime: 10.0,
            memory: 1,
            test_cases_passed: 4,
            test_cases_total: 5,
            error_message: None,
        };
        assert!(matches!(
            s.apply(&outcome, Utc::now()),
            Err(SubmissionError::InconsistentOutcome(_))
        ));
        assert_eq!(s, before);
    }
}
