//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ProblemId, SubmissionId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::judge_outcome::JudgeOutcome;
use crate::domain::value_object::language::Language;
use crate::domain::value_object::submission_status::SubmissionStatus;
use crate::error::{SubmissionError, SubmissionResult};

const SUBMISSION_COLUMNS: &str = r#"
    submission_id,
    user_id,
    problem_id,
    source_code,
    language,
    status,
    runtime,
    memory,
    error_message,
    test_cases_passed,
    test_cases_total,
    created_at,
    updated_at,
    judged_at
"#;

/// PostgreSQL-backed submission ledger
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmissionRepository for PgSubmissionRepository {
    async fn create(&self, submission: &Submission) -> SubmissionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO submissions (
                submission_id,
                user_id,
                problem_id,
                source_code,
                language,
                status,
                runtime,
                memory,
                error_message,
                test_cases_passed,
                test_cases_total,
                created_at,
                updated_at,
                judged_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(submission.submission_id.as_uuid())
        .bind(submission.user_id.as_uuid())
        .bind(submission.problem_id.as_uuid())
        .bind(&submission.source_code)
        .bind(submission.language.id())
        .bind(submission.status.id())
        .bind(submission.runtime)
        .bind(bigint(submission.memory)?)
        .bind(&submission.error_message)
        .bind(integer(submission.test_cases_passed)?)
        .bind(integer(submission.test_cases_total)?)
        .bind(submission.created_at)
        .bind(submission.updated_at)
        .bind(submission.judged_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, submission_id: &SubmissionId) -> SubmissionResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE submission_id = $1"
        ))
        .bind(submission_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_submission()).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        problem_id: Option<&ProblemId>,
        limit: u32,
    ) -> SubmissionResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS}
            FROM submissions
            WHERE user_id = $1
              AND ($2::uuid IS NULL OR problem_id = $2)
            ORDER BY created_at DESC, submission_id DESC
            LIMIT $3
            "#
        ))
        .bind(user_id.as_uuid())
        .bind(problem_id.map(|p| *p.as_uuid()))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_submission()).collect()
    }

    async fn complete(
        &self,
        submission_id: &SubmissionId,
        outcome: &JudgeOutcome,
    ) -> SubmissionResult<Submission> {
        let memory = bigint(outcome.memory)?;
        let passed = integer(outcome.test_cases_passed)?;
        let total = integer(outcome.test_cases_total)?;

        // Status and every result field change in one statement, guarded on
        // the row still being pending.
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            r#"
            UPDATE submissions SET
                status = $2,
                runtime = $3,
                memory = $4,
                error_message = $5,
                test_cases_passed = $6,
                test_cases_total = $7,
                updated_at = NOW(),
                judged_at = NOW()
            WHERE submission_id = $1 AND status = $8
            RETURNING {SUBMISSION_COLUMNS}
            "#
        ))
        .bind(submission_id.as_uuid())
        .bind(outcome.verdict.status().id())
        .bind(outcome.runtime)
        .bind(memory)
        .bind(outcome.stored_error_message())
        .bind(passed)
        .bind(total)
        .bind(SubmissionStatus::Pending.id())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => r.into_submission(),
            None => {
                let exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM submissions WHERE submission_id = $1)",
                )
                .bind(submission_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

                if exists {
                    Err(SubmissionError::AlreadyJudged)
                } else {
                    Err(SubmissionError::NotFound)
                }
            }
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    submission_id: Uuid,
    user_id: Uuid,
    problem_id: Uuid,
    source_code: String,
    language: i16,
    status: i16,
    runtime: f64,
    memory: i64,
    error_message: String,
    test_cases_passed: i32,
    test_cases_total: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    judged_at: Option<DateTime<Utc>>,
}

impl SubmissionRow {
    fn into_submission(self) -> SubmissionResult<Submission> {
        let language = Language::from_id(self.language).ok_or_else(|| {
            SubmissionError::Internal(format!("Invalid language id: {}", self.language))
        })?;
        let status = SubmissionStatus::from_id(self.status).ok_or_else(|| {
            SubmissionError::Internal(format!("Invalid status id: {}", self.status))
        })?;
        let count = |value: i32| {
            u32::try_from(value)
                .map_err(|_| SubmissionError::Internal(format!("Negative test count: {value}")))
        };

        Ok(Submission {
            submission_id: SubmissionId::from_uuid(self.submission_id),
            user_id: UserId::from_uuid(self.user_id),
            problem_id: ProblemId::from_uuid(self.problem_id),
            source_code: self.source_code,
            language,
            status,
            runtime: self.runtime,
            memory: u64::try_from(self.memory)
                .map_err(|_| SubmissionError::Internal(format!("Negative memory: {}", self.memory)))?,
            error_message: self.error_message,
            test_cases_passed: count(self.test_cases_passed)?,
            test_cases_total: count(self.test_cases_total)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            judged_at: self.judged_at,
        })
    }
}

fn bigint(memory: u64) -> SubmissionResult<i64> {
    i64::try_from(memory).map_err(|_| SubmissionError::InconsistentOutcome("memory is out of range"))
}

fn integer(count: u32) -> SubmissionResult<i32> {
    i32::try_from(count)
        .map_err(|_| SubmissionError::InconsistentOutcome("test case count is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_never_wrap_negative() {
        assert_eq!(integer(10).unwrap(), 10);
        assert_eq!(integer(i32::MAX as u32).unwrap(), i32::MAX);
        assert!(matches!(
            integer(3_000_000_000),
            Err(SubmissionError::InconsistentOutcome(_))
        ));
    }

    #[test]
    fn test_memory_fits_bigint() {
        assert_eq!(bigint(128).unwrap(), 128);
        assert!(bigint(u64::MAX).is_err());
    }
}
