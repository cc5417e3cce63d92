//! Revocation Key Value Object
//!
//! Registry entries are keyed by the SHA-256 digest of the token, so the
//! registry never holds a usable credential.

use std::fmt;

/// Digest identifying one token in the revocation registry
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevocationKey([u8; 32]);

impl RevocationKey {
    /// Derive the key for a raw token string
    pub fn of(token: &str) -> Self {
        Self(platform::crypto::sha256(token.as_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short prefix safe to put in logs
    pub fn fingerprint(&self) -> String {
        hex::encode(&self.0[..6])
    }
}

impl fmt::Debug for RevocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevocationKey({}..)", self.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_token_same_key() {
        assert_eq!(RevocationKey::of("a.b"), RevocationKey::of("a.b"));
        assert_ne!(RevocationKey::of("a.b"), RevocationKey::of("a.c"));
    }

    #[test]
    fn test_hex_forms() {
        let key = RevocationKey::of("");
        assert_eq!(
            key.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(key.fingerprint(), "e3b0c44298fc");
        assert_eq!(format!("{key:?}"), "RevocationKey(e3b0c44298fc..)");
    }
}
