//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::SubmissionAppState;
pub use middleware::{JUDGE_TOKEN_HEADER, require_judge};
pub use router::submission_router;
