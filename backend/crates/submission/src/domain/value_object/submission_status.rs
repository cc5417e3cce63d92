//! Submission Status Value Objects
//!
//! `SubmissionStatus` is what a record holds. `Verdict` is what a judge may
//! report: the terminal subset, so `pending` can never be a target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum SubmissionStatus {
    /// Waiting for the judge
    #[default]
    Pending = 0,
    Accepted = 1,
    Wrong = 2,
    Error = 3,
}

impl SubmissionStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Accepted => "accepted",
            SubmissionStatus::Wrong => "wrong",
            SubmissionStatus::Error => "error",
        }
    }

    /// Terminal states never change again
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Pending)
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(SubmissionStatus::Pending),
            1 => Some(SubmissionStatus::Accepted),
            2 => Some(SubmissionStatus::Wrong),
            3 => Some(SubmissionStatus::Error),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(SubmissionStatus::Pending),
            "accepted" => Some(SubmissionStatus::Accepted),
            "wrong" => Some(SubmissionStatus::Wrong),
            "error" => Some(SubmissionStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Terminal outcome reported by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Wrong,
    Error,
}

impl Verdict {
    pub const fn status(&self) -> SubmissionStatus {
        match self {
            Verdict::Accepted => SubmissionStatus::Accepted,
            Verdict::Wrong => SubmissionStatus::Wrong,
            Verdict::Error => SubmissionStatus::Error,
        }
    }
}

impl From<Verdict> for SubmissionStatus {
    fn from(verdict: Verdict) -> Self {
        verdict.status()
    }
}
