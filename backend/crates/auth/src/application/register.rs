//! Register Use Case
//!
//! Creates a new account. Username and email uniqueness is checked as
//! one combined query so the conflict response never reveals which of
//! the two collided.

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Input for registration
#[derive(Debug)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Output of a successful registration
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Registration use case
pub struct RegisterUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if input.username.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("All fields are required".into()));
        }

        let username = UserName::new(input.username)?;
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.repo.username_or_email_taken(&username, &email).await? {
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(username, email, password_hash);

        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
