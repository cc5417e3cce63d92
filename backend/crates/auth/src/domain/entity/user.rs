//! User Entity
//!
//! The slice of a user record that authentication needs. Profile data and
//! credentials belong to the identity service and are not modelled here.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::user_status::UserStatus;

/// User identity as read by the auth gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            user_status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.user_status.is_blocked()
    }

    pub fn set_status(&mut self, status: UserStatus) {
        self.user_status = status;
        self.updated_at = Utc::now();
    }
}
