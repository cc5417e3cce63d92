//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Only three reasons are visible to a rejected caller: the token is
//! missing, the token is invalid (bad signature, expired, or revoked; these
//! are merged on purpose), or the user no longer exists. Infrastructure
//! trouble is reported separately as service unavailability so clients do
//! not mistake it for a bad credential.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::token_codec::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token on the request
    #[error("Token is not present")]
    MissingToken,

    /// Bad signature, expired, revoked, or no subject
    #[error("Invalid token")]
    InvalidToken,

    /// Token subject does not resolve to a user
    #[error("User does not exist")]
    UserNotFound,

    /// Token issuance refused for a blocked identity
    #[error("Account is blocked")]
    AccountBlocked,

    /// A backing store did not answer within its deadline
    #[error("{0} is unavailable")]
    StoreUnavailable(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis error
    #[error("Revocation store error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::UserNotFound => {
                ErrorKind::Unauthorized
            }
            AuthError::AccountBlocked => ErrorKind::Forbidden,
            AuthError::StoreUnavailable(_) | AuthError::Redis(_) => ErrorKind::ServiceUnavailable,
            AuthError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                    ErrorKind::ServiceUnavailable
                }
                _ => ErrorKind::InternalServerError,
            },
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this is one of the expected credential rejections
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::UserNotFound
        )
    }

    /// Convert to AppError
    ///
    /// Store and internal failures get a generic message; their detail only
    /// goes to the log.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match self {
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::UserNotFound => {
                AppError::new(kind, self.to_string()).with_action("Please sign in again")
            }
            AuthError::AccountBlocked => AppError::new(kind, self.to_string()),
            _ if kind == ErrorKind::ServiceUnavailable => {
                AppError::new(kind, "Authentication is temporarily unavailable")
                    .with_action("Please retry shortly")
            }
            _ => AppError::new(kind, "Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Redis(e) => {
                tracing::error!(error = %e, "Revocation store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::StoreUnavailable(store) => {
                tracing::warn!(store = %store, "Auth dependency timed out, failing closed");
            }
            _ => {
                tracing::debug!(error = %self, "Request rejected by auth gate");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error().with_source(err)
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => AuthError::MissingToken,
            TokenError::InvalidSignature | TokenError::Expired => AuthError::InvalidToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::UNAUTHORIZED),
            (AuthError::AccountBlocked, StatusCode::FORBIDDEN),
            (
                AuthError::StoreUnavailable("revocation registry"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AuthError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AuthError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error:?}");
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_token_errors_collapse() {
        assert!(matches!(
            AuthError::from(TokenError::Missing),
            AuthError::MissingToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::InvalidSignature),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(AuthError::MissingToken.to_app_error().message(), "Token is not present");
        assert_eq!(AuthError::InvalidToken.to_app_error().message(), "Invalid token");
        assert_eq!(AuthError::UserNotFound.to_app_error().message(), "User does not exist");
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let app = AuthError::Internal("key material 0xdeadbeef".into()).to_app_error();
        assert!(!app.message().contains("deadbeef"));

        let app = AuthError::StoreUnavailable("identity store").to_app_error();
        assert!(!app.message().contains("identity store"));
    }

    #[test]
    fn test_rejection_classification() {
        assert!(AuthError::InvalidToken.is_rejection());
        assert!(!AuthError::StoreUnavailable("x").is_rejection());
    }
}
