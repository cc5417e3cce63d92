//! Submission Ledger Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Submission entity and state machine, value objects, repository trait
//! - `application/` - Use cases and config
//! - `infra/` - PostgreSQL and in-memory ledgers
//! - `presentation/` - HTTP handlers, DTOs, judge middleware, router
//!
//! ## Lifecycle
//! - A submission is created `pending` by its authenticated author
//! - The external judge reports exactly one terminal outcome: `accepted`, `wrong` or `error`
//! - The transition is a compare-and-set: of two racing reports one wins, the other gets `AlreadyJudged`
//! - Status and results are written together; a half-judged record is never observable

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SubmissionConfig;
pub use error::{SubmissionError, SubmissionResult};
pub use infra::{MemorySubmissionRepository, PgSubmissionRepository};
pub use presentation::router::submission_router;
