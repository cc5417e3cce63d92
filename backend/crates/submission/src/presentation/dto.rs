//! API DTOs (Data Transfer Objects)

use kernel::id::ProblemId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::submission::Submission;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::domain::value_object::submission_status::Verdict;

// ============================================================================
// Create
// ============================================================================

/// Create submission request
///
/// There is deliberately no user field: the author is the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub problem_id: ProblemId,
    pub code: String,
    pub language: String,
}

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubmissionsQuery {
    pub problem_id: Option<ProblemId>,
    pub limit: Option<u32>,
}

// ============================================================================
// Judge report
// ============================================================================

/// Result reported by the judge
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeReportRequest {
    pub status: Verdict,
    pub runtime: f64,
    pub memory: u64,
    pub test_case_passed: u32,
    pub test_case_total: u32,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl From<JudgeReportRequest> for JudgeOutcome {
    fn from(req: JudgeReportRequest) -> Self {
        Self {
            verdict: req.status,
            runtime: req.runtime,
            memory: req.memory,
            test_cases_passed: req.test_case_passed,
            test_cases_total: req.test_case_total,
            error_message: req.error_message,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Full submission view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub submission_id: String,
    pub user_id: String,
    pub problem_id: String,
    pub code: String,
    pub language: String,
    pub status: String,
    pub runtime: f64,
    pub memory: u64,
    pub error_message: String,
    pub test_case_passed: u32,
    pub test_case_total: u32,
    pub created_at: i64,
    pub updated_at: i64,
    pub judged_at: Option<i64>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            submission_id: s.submission_id.to_string(),
            user_id: s.user_id.to_string(),
            problem_id: s.problem_id.to_string(),
            code: s.source_code,
            language: s.language.code().to_string(),
            status: s.status.code().to_string(),
            runtime: s.runtime,
            memory: s.memory,
            error_message: s.error_message,
            test_case_passed: s.test_cases_passed,
            test_case_total: s.test_cases_total,
            created_at: s.created_at.timestamp_millis(),
            updated_at: s.updated_at.timestamp_millis(),
            judged_at: s.judged_at.map(|t| t.timestamp_millis()),
        }
    }
}

/// List entry; omits the source
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub submission_id: String,
    pub problem_id: String,
    pub language: String,
    pub status: String,
    pub runtime: f64,
    pub memory: u64,
    pub test_case_passed: u32,
    pub test_case_total: u32,
    pub created_at: i64,
}

impl From<Submission> for SubmissionSummary {
    fn from(s: Submission) -> Self {
        Self {
            submission_id: s.submission_id.to_string(),
            problem_id: s.problem_id.to_string(),
            language: s.language.code().to_string(),
            status: s.status.code().to_string(),
            runtime: s.runtime,
            memory: s.memory,
            test_case_passed: s.test_cases_passed,
            test_case_total: s.test_cases_total,
            created_at: s.created_at.timestamp_millis(),
        }
    }
}
