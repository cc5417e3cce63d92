//! Token Codec
//!
//! Issues and verifies signed session tokens. Pure CPU work, no storage.
//!
//! Wire format: `base64url(claims_json) "." base64url(HMAC-SHA256(key, first_segment))`.
//! The MAC covers the encoded segment exactly as transmitted, so any change
//! to the token text fails verification before the payload is decoded.

use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use platform::secret::SecretKey;

use crate::domain::value_object::token_claims::TokenClaims;

/// Verification failures
///
/// Deliberately carries no detail about which byte or field was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Absent or empty token
    #[error("token is not present")]
    Missing,

    /// Structure, encoding or signature does not check out
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Signature is valid but the token is past its expiry
    #[error("token has expired")]
    Expired,
}

/// A freshly issued token and its claims
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

impl IssuedToken {
    pub fn expires_at_ms(&self) -> i64 {
        self.claims.exp
    }
}

/// HMAC-SHA256 session token codec
#[derive(Debug, Clone)]
pub struct TokenCodec {
    key: SecretKey,
}

impl TokenCodec {
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    /// Issue a token for `subject` valid for `ttl` from now
    pub fn issue(&self, subject: &UserId, ttl: Duration) -> Result<IssuedToken, serde_json::Error> {
        self.issue_at(subject, ttl, Utc::now().timestamp_millis())
    }

    /// Issue a token with an explicit clock
    pub fn issue_at(
        &self,
        subject: &UserId,
        ttl: Duration,
        now_ms: i64,
    ) -> Result<IssuedToken, serde_json::Error> {
        let claims = TokenClaims::new(subject, now_ms, ttl);
        let token = self.sign(&claims)?;
        Ok(IssuedToken { token, claims })
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    /// Verify a token with an explicit clock
    ///
    /// Order matters: presence, then signature, then payload decoding, then
    /// expiry. No claim is read before the signature has been checked.
    pub fn verify_at(&self, token: &str, now_ms: i64) -> Result<TokenClaims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or(TokenError::InvalidSignature)?;

        let signature =
            from_base64url(signature_b64).map_err(|_| TokenError::InvalidSignature)?;

        if !verify_hmac_sha256(self.key.expose(), payload_b64.as_bytes(), &signature) {
            return Err(TokenError::InvalidSignature);
        }

        let payload = from_base64url(payload_b64).map_err(|_| TokenError::InvalidSignature)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::InvalidSignature)?;

        if claims.is_expired_at(now_ms) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, serde_json::Error> {
        let payload_b64 = to_base64url(&serde_json::to_vec(claims)?);
        let signature = hmac_sha256(self.key.expose(), payload_b64.as_bytes());
        Ok(format!("{}.{}", payload_b64, to_base64url(&signature)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_750_000_000_000;

    fn codec() -> TokenCodec {
        TokenCodec::new(SecretKey::from_bytes(vec![9u8; 32]).unwrap())
    }

    #[test]
    fn test_issue_then_verify() {
        let codec = codec();
        let user_id = UserId::new();
        let issued = codec
            .issue_at(&user_id, Duration::from_secs(3600), NOW)
            .unwrap();

        let claims = codec.verify_at(&issued.token, NOW + 1_000).unwrap();
        assert_eq!(claims.subject(), Some(user_id));
        assert_eq!(claims, issued.claims);
        assert_eq!(issued.expires_at_ms(), NOW + 3_600_000);
    }

    #[test]
    fn test_tokens_are_unique() {
        let codec = codec();
        let user_id = UserId::new();
        let a = codec.issue_at(&user_id, Duration::from_secs(60), NOW).unwrap();
        let b = codec.issue_at(&user_id, Duration::from_secs(60), NOW).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert_eq!(codec().verify_at("", NOW), Err(TokenError::Missing));
    }

    #[test]
    fn test_garbage_is_invalid_signature() {
        let codec = codec();
        for token in ["abc", "abc.def", ".", "a.b.c", "!!!.???"] {
            assert_eq!(
                codec.verify_at(token, NOW),
                Err(TokenError::InvalidSignature),
                "{token}"
            );
        }
    }

    #[test]
    fn test_any_single_bit_flip_fails() {
        let codec = codec();
        let issued = codec
            .issue_at(&UserId::new(), Duration::from_secs(3600), NOW)
            .unwrap();
        let original = issued.token.into_bytes();

        for index in 0..original.len() {
            for bit in 0..8 {
                let mut tampered = original.clone();
                tampered[index] ^= 1 << bit;
                let Ok(tampered) = String::from_utf8(tampered) else {
                    continue;
                };
                let result = codec.verify_at(&tampered, NOW);
                assert!(
                    matches!(result, Err(TokenError::InvalidSignature | TokenError::Missing)),
                    "flip at byte {index} bit {bit} was accepted"
                );
            }
        }
    }

    #[test]
    fn test_forged_payload_with_reused_signature_fails() {
        let codec = codec();
        let victim = codec
            .issue_at(&UserId::new(), Duration::from_secs(60), NOW)
            .unwrap();
        let attacker = codec
            .issue_at(&UserId::new(), Duration::from_secs(60), NOW)
            .unwrap();

        let (victim_payload, _) = victim.token.split_once('.').unwrap();
        let (_, attacker_sig) = attacker.token.split_once('.').unwrap();
        let forged = format!("{victim_payload}.{attacker_sig}");

        assert_eq!(codec.verify_at(&forged, NOW), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_other_key_fails() {
        let issued = codec()
            .issue_at(&UserId::new(), Duration::from_secs(60), NOW)
            .unwrap();
        let other = TokenCodec::new(SecretKey::from_bytes(vec![10u8; 32]).unwrap());
        assert_eq!(
            other.verify_at(&issued.token, NOW),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token() {
        let codec = codec();
        let issued = codec
            .issue_at(&UserId::new(), Duration::from_secs(60), NOW)
            .unwrap();

        assert!(codec.verify_at(&issued.token, NOW + 59_999).is_ok());
        assert_eq!(
            codec.verify_at(&issued.token, NOW + 60_000),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_zero_ttl_is_born_expired() {
        let codec = codec();
        let issued = codec.issue_at(&UserId::new(), Duration::ZERO, NOW).unwrap();
        assert_eq!(codec.verify_at(&issued.token, NOW), Err(TokenError::Expired));
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let codec = codec();
        let issued = codec
            .issue_at(&UserId::new(), Duration::from_secs(60), NOW)
            .unwrap();
        let mut tampered = issued.token.clone();
        tampered.push('A');

        // Long expired and tampered: signature failure wins.
        assert_eq!(
            codec.verify_at(&tampered, NOW + 3_600_000),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_codec_debug_hides_key() {
        let printed = format!("{:?}", codec());
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("9, 9"));
    }
}
