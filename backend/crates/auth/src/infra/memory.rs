//! In-Memory User Repository (test support)

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::UserPassword;
use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use std::sync::Mutex;

/// Mutex-backed repository for unit tests
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AppResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &UserName) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn username_or_email_taken(
        &self,
        username: &UserName,
        email: &Email,
    ) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == *username || u.email == *email))
    }

    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.user_id == *user_id) {
            user.set_password(password_hash.clone());
        }
        Ok(())
    }
}
