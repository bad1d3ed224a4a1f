//! User Entity
//!
//! A registered account. Carries the identity pair (username, email),
//! the Argon2id password hash, and bookkeeping timestamps.

use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::UserPassword;
use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and current timestamps
    pub fn new(username: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash and touch `updated_at`
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
