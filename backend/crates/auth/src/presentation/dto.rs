//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::presentation::middleware::CurrentUser;

/// Current user response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub user_status: String,
    pub token_expires_at_ms: i64,
}

impl From<&CurrentUser> for MeResponse {
    fn from(user: &CurrentUser) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            user_status: user.user_status.code().to_string(),
            token_expires_at_ms: user.token_expires_at_ms,
        }
    }
}
