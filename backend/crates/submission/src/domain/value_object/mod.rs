//! Value Objects

pub mod judge_outcome;
pub mod language;
pub mod submission_status;
