//! Application Configuration
//!
//! Configuration for the Submission application layer.

use platform::crypto::constant_time_eq;
use platform::secret::SecretKey;

/// Submission application configuration
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    /// Largest accepted source, in bytes
    pub max_source_bytes: usize,
    /// Shared secret the judge presents; `None` refuses every report
    pub judge_secret: Option<SecretKey>,
    /// Page size when the caller gives none
    pub default_list_limit: u32,
    /// Hard cap on page size
    pub max_list_limit: u32,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: 64 * 1024,
            judge_secret: None,
            default_list_limit: 20,
            max_list_limit: 100,
        }
    }
}

impl SubmissionConfig {
    pub fn with_judge_secret(judge_secret: SecretKey) -> Self {
        Self {
            judge_secret: Some(judge_secret),
            ..Default::default()
        }
    }

    /// Constant-time check of a presented judge credential
    pub fn judge_credential_matches(&self, presented: &[u8]) -> bool {
        match &self.judge_secret {
            Some(secret) => constant_time_eq(presented, secret.expose()),
            None => false,
        }
    }

    /// Effective page size for a requested limit
    pub fn list_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_list_limit)
            .clamp(1, self.max_list_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"judge-shared-secret-0123456789abcdef";

    #[test]
    fn test_no_secret_refuses_everything() {
        let config = SubmissionConfig::default();
        assert!(!config.judge_credential_matches(b""));
        assert!(!config.judge_credential_matches(SECRET));
    }

    #[test]
    fn test_secret_must_match_exactly() {
        let config =
            SubmissionConfig::with_judge_secret(SecretKey::from_bytes(SECRET.to_vec()).unwrap());
        assert!(config.judge_credential_matches(SECRET));
        assert!(!config.judge_credential_matches(&SECRET[..SECRET.len() - 1]));
        assert!(!config.judge_credential_matches(b"judge-shared-secret-0123456789abcdeF"));
    }

    #[test]
    fn test_list_limit() {
        let config = SubmissionConfig::default();
        assert_eq!(config.list_limit(None), 20);
        assert_eq!(config.list_limit(Some(0)), 1);
        assert_eq!(config.list_limit(Some(50)), 50);
        assert_eq!(config.list_limit(Some(10_000)), 100);
    }
}
