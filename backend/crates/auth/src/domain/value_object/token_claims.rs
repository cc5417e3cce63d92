//! Token Claims Value Object
//!
//! The payload carried inside a session token. Nothing here may be trusted
//! until the codec has verified the signature over it.

use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id). Optional in the wire schema: a verified token
    /// without a subject is still rejected by the gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued at (Unix timestamp ms)
    pub iat: i64,
    /// Expires at (Unix timestamp ms)
    pub exp: i64,
    /// Unique token id
    pub jti: Uuid,
}

impl TokenClaims {
    pub fn new(subject: &UserId, issued_at_ms: i64, ttl: Duration) -> Self {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            sub: Some(subject.to_string()),
            iat: issued_at_ms,
            exp: issued_at_ms.saturating_add(ttl_ms),
            jti: Uuid::new_v4(),
        }
    }

    /// Subject as a user id, if present and well-formed
    pub fn subject(&self) -> Option<UserId> {
        self.sub.as_deref()?.parse().ok()
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.exp
    }

    /// Validity left at `now_ms`; zero once expired
    pub fn remaining_at(&self, now_ms: i64) -> Duration {
        let left = self.exp.saturating_sub(now_ms).max(0);
        Duration::from_millis(left as u64)
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Utc::now().timestamp_millis())
    }
}
