//! Domain Layer
//!
//! Contains the submission entity, its state machine, value objects, and
//! the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::submission::Submission;
pub use repository::SubmissionRepository;
pub use value_object::{
    judge_outcome::JudgeOutcome,
    language::Language,
    submission_status::{SubmissionStatus, Verdict},
};
