//! Secret Key Handling
//!
//! Symmetric keys live in memory only as [`SecretKey`]: the bytes are wiped
//! on drop and `Debug` never prints them, so a key can sit inside a config
//! struct that gets logged without leaking.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{from_base64, random_bytes};

/// Minimum accepted key length in bytes (HMAC-SHA256 block strength)
pub const MIN_SECRET_LEN: usize = 32;

/// Error when building a secret key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretKeyError {
    #[error("secret key must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    TooShort(usize),
    #[error("secret key is not valid base64")]
    InvalidEncoding,
}

/// Process-wide symmetric key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SecretKeyError> {
        if bytes.len() < MIN_SECRET_LEN {
            return Err(SecretKeyError::TooShort(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Decode a standard base64 key (as stored in environment variables)
    pub fn from_base64(encoded: &str) -> Result<Self, SecretKeyError> {
        let bytes = from_base64(encoded.trim()).map_err(|_| SecretKeyError::InvalidEncoding)?;
        Self::from_bytes(bytes)
    }

    /// Fresh random key (development and tests)
    pub fn random() -> Self {
        Self(random_bytes(MIN_SECRET_LEN))
    }

    /// Key bytes, for signing only
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}
