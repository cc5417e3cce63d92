//! Judge Outcome Value Object
//!
//! A judge report, validated before it is allowed near a record.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::submission_status::Verdict;
use crate::error::{SubmissionError, SubmissionResult};

/// Result reported by the external judge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeOutcome {
    pub verdict: Verdict,
    /// Wall time, judge units (ms)
    pub runtime: f64,
    /// Peak memory, judge units (KiB)
    pub memory: u64,
    pub test_cases_passed: u32,
    pub test_cases_total: u32,
    pub error_message: Option<String>,
}

impl JudgeOutcome {
    /// Check the outcome is internally consistent
    pub fn validate(&self) -> SubmissionResult<()> {
        if !self.runtime.is_finite() || self.runtime < 0.0 {
            return Err(SubmissionError::InconsistentOutcome(
                "runtime must be a finite, non-negative number",
            ));
        }
        // Stored as BIGINT.
        if self.memory > i64::MAX as u64 {
            return Err(SubmissionError::InconsistentOutcome("memory is out of range"));
        }
        // Counts are stored as INTEGER.
        if self.test_cases_total > i32::MAX as u32 {
            return Err(SubmissionError::InconsistentOutcome(
                "test case count is out of range",
            ));
        }
        if self.test_cases_passed > self.test_cases_total {
            return Err(SubmissionError::InconsistentOutcome(
                "passed test cases exceed total",
            ));
        }
        if self.verdict == Verdict::Accepted && self.test_cases_passed != self.test_cases_total {
            return Err(SubmissionError::InconsistentOutcome(
                "accepted requires every test case to pass",
            ));
        }
        Ok(())
    }

    /// Error text to store; empty unless the verdict is `error`
    pub fn stored_error_message(&self) -> String {
        match self.verdict {
            Verdict::Error => self.error_message.clone().unwrap_or_default(),
            Verdict::Accepted | Verdict::Wrong => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(verdict: Verdict, passed: u32, total: u32) -> JudgeOutcome {
        JudgeOutcome {
            verdict,
            runtime: 42.0,
            memory: 128,
            test_cases_passed: passed,
            test_cases_total: total,
            error_message: None,
        }
    }

    #[test]
    fn test_accepted_requires_full_pass() {
        assert!(outcome(Verdict::Accepted, 10, 10).validate().is_ok());
        assert!(matches!(
            outcome(Verdict::Accepted, 9, 10).validate(),
            Err(SubmissionError::InconsistentOutcome(_))
        ));
    }

    #[test]
    fn test_error_allows_partial_pass() {
        assert!(outcome(Verdict::Error, 3, 10).validate().is_ok());
        assert!(outcome(Verdict::Wrong, 0, 10).validate().is_ok());
    }

    #[test]
    fn test_passed_never_exceeds_total() {
        assert!(outcome(Verdict::Wrong, 11, 10).validate().is_err());
        assert!(outcome(Verdict::Error, 1, 0).validate().is_err());
    }

    #[test]
    fn test_counts_fit_integer_column() {
        assert!(outcome(Verdict::Wrong, 0, i32::MAX as u32).validate().is_ok());
        assert!(matches!(
            outcome(Verdict::Wrong, 0, 3_000_000_000).validate(),
            Err(SubmissionError::InconsistentOutcome("test case count is out of range"))
        ));
        assert!(matches!(
            outcome(Verdict::Accepted, u32::MAX, u32::MAX).validate(),
            Err(SubmissionError::InconsistentOutcome(_))
        ));
    }

    #[test]
    fn test_runtime_must_be_sane() {
        for runtime in [-1.0, f64::NAN, f64::INFINITY] {
            let mut o = outcome(Verdict::Wrong, 0, 1);
            o.runtime = runtime;
            assert!(o.validate().is_err(), "{runtime}");
        }
    }

    #[test]
    fn test_error_text_only_kept_for_error() {
        let mut o = outcome(Verdict::Wrong, 1, 2);
        o.error_message = Some("segfault".into());
        assert_eq!(o.stored_error_message(), "");

        o.verdict = Verdict::Error;
        assert_eq!(o.stored_error_message(), "segfault");
    }
}
