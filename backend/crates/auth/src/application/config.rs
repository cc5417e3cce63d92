//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only behind an `Arc`.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::secret::SecretKey;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie carrying the session token
    pub token_cookie_name: String,
    /// Lifetime of newly issued tokens
    pub token_ttl: Duration,
    /// Symmetric signing key; `Debug` prints it redacted
    pub signing_key: SecretKey,
    /// Upper bound for each identity store / revocation registry call
    pub store_timeout: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "token".to_string(),
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            signing_key: SecretKey::random(),
            store_timeout: Duration::from_secs(2),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Production config around an externally provisioned key
    pub fn with_signing_key(signing_key: SecretKey) -> Self {
        Self {
            signing_key,
            ..Default::default()
        }
    }

    /// Create config for development (random key, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    pub fn token_ttl_ms(&self) -> i64 {
        i64::try_from(self.token_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// Cookie settings for the token cookie
    pub fn token_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}
