//! Application Layer
//!
//! Use cases and application services.

pub mod apply_result;
pub mod config;
pub mod create_submission;
pub mod query_submissions;

// Re-exports
pub use apply_result::ApplyResultUseCase;
pub use config::SubmissionConfig;
pub use create_submission::{CreateSubmissionInput, CreateSubmissionUseCase};
pub use query_submissions::QuerySubmissionsUseCase;
