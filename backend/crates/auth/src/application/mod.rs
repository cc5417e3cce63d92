//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod issue_token;
pub mod sign_out;

// Re-exports
pub use authenticate::{AuthGate, Authenticated};
pub use config::AuthConfig;
pub use issue_token::{IssueTokenOutput, IssueTokenUseCase};
pub use sign_out::{SignOutOutput, SignOutUseCase};
