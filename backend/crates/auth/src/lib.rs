//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Token codec, entities, value objects, repository traits
//! - `application/` - Auth gate, use cases, config
//! - `infra/` - PostgreSQL, Redis and in-memory backends
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Security Model
//! - Tokens are HMAC-SHA256 signed; the signature is checked before any claim is read
//! - Revocation is per token, keyed by the SHA-256 of the token, and lives exactly as long as the token
//! - Blocking is per identity and stored on the user, never in the revocation registry
//! - Callers only ever see MissingToken, InvalidToken or UserNotFound
//! - A store that misses its deadline fails the request closed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, AuthGate, Authenticated};
pub use error::{AuthError, AuthResult};
pub use infra::{
    MemoryRevocationRegistry, MemoryUserRepository, PgAuthRepository, RedisRevocationRegistry,
};
pub use presentation::middleware::{CurrentUser, require_auth};
pub use presentation::router::auth_router;
