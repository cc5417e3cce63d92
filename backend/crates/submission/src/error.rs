//! Submission Error Types
//!
//! This module provides submission-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Submission-specific result type alias
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Submission-specific error variants
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid source code: {0}")]
    InvalidSource(&'static str),

    #[error("Submission not found")]
    NotFound,

    #[error("Submission already judged")]
    AlreadyJudged,

    #[error("Inconsistent outcome: {0}")]
    InconsistentOutcome(&'static str),

    /// Identity is blocked
    #[error("Account is not allowed to submit")]
    Forbidden,

    /// Judge report without the shared secret
    #[error("Judge credentials are invalid")]
    JudgeUnauthorized,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubmissionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::UnsupportedLanguage(_) | SubmissionError::InvalidSource(_) => {
                ErrorKind::BadRequest
            }
            SubmissionError::NotFound => ErrorKind::NotFound,
            SubmissionError::AlreadyJudged => ErrorKind::Conflict,
            SubmissionError::InconsistentOutcome(_) => ErrorKind::UnprocessableEntity,
            SubmissionError::Forbidden => ErrorKind::Forbidden,
            SubmissionError::JudgeUnauthorized => ErrorKind::Unauthorized,
            SubmissionError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                    ErrorKind::ServiceUnavailable
                }
                _ => ErrorKind::InternalServerError,
            },
            SubmissionError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match self {
            SubmissionError::UnsupportedLanguage(_) => AppError::new(kind, self.to_string())
                .with_action("Use one of: c++, java, javascript, python"),
            SubmissionError::Database(_) | SubmissionError::Internal(_) => {
                if kind == ErrorKind::ServiceUnavailable {
                    AppError::new(kind, "Submission store is temporarily unavailable")
                        .with_action("Please retry shortly")
                } else {
                    AppError::new(kind, "Internal server error")
                }
            }
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SubmissionError::Database(e) => {
                tracing::error!(error = %e, "Submission database error");
            }
            SubmissionError::Internal(msg) => {
                tracing::error!(message = %msg, "Submission internal error");
            }
            SubmissionError::JudgeUnauthorized => {
                tracing::warn!("Judge report refused: bad credentials");
            }
            _ => {
                tracing::debug!(error = %self, "Submission request rejected");
            }
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        err.to_app_error().with_source(err)
    }
}
