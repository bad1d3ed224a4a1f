//! Change Password Use Case
//!
//! Re-authenticates with the old password before storing a new hash.
//! Unknown username and wrong old password produce the same error.
//! Previously issued tokens remain valid until they expire.

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};
use std::sync::Arc;

/// Input for password change
#[derive(Debug)]
pub struct ChangePasswordInput {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

/// Password change use case
pub struct ChangePasswordUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> ChangePasswordUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        if input.username.is_empty() || input.old_password.is_empty() || input.new_password.is_empty()
        {
            return Err(AuthError::Validation("All fields are required".into()));
        }

        let username = UserName::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;
        let old_password =
            RawPassword::new(input.old_password).map_err(|_| AuthError::InvalidCredentials)?;
        let new_password = RawPassword::new(input.new_password)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&old_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let new_hash = UserPassword::from_raw(&new_password, self.config.pepper())?;
        self.repo.update_password(&user.user_id, &new_hash).await?;

        tracing::info!(user_id = %user.user_id, "Password changed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::login::{LoginInput, LoginUseCase};
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        config: Arc<AuthConfig>,
    }

    impl Fixture {
        async fn new() -> Self {
            let repo = Arc::new(InMemoryUserRepository::new());
            let config = Arc::new(AuthConfig::development());

            RegisterUseCase::new(Arc::clone(&repo), Arc::clone(&config))
                .execute(RegisterInput {
                    username: "alice".into(),
                    email: "alice@example.com".into(),
                    password: "old password".into(),
                })
                .await
                .unwrap();

            Self { repo, config }
        }

        fn change(&self) -> ChangePasswordUseCase<InMemoryUserRepository> {
            ChangePasswordUseCase::new(Arc::clone(&self.repo), Arc::clone(&self.config))
        }

        fn login(&self) -> LoginUseCase<InMemoryUserRepository> {
            LoginUseCase::new(Arc::clone(&self.repo), Arc::clone(&self.config))
        }
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let fx = Fixture::new().await;

        fx.change()
            .execute(ChangePasswordInput {
                username: "alice".into(),
                old_password: "old password".into(),
                new_password: "new password".into(),
            })
            .await
            .unwrap();

        // Old password no longer works, new one does
        assert!(
            fx.login()
                .execute(LoginInput {
                    username: "alice".into(),
                    password: "old password".into(),
                })
                .await
                .is_err()
        );
        assert!(
            fx.login()
                .execute(LoginInput {
                    username: "alice".into(),
                    password: "new password".into(),
                })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_change_password_wrong_old_password() {
        let fx = Fixture::new().await;

        let err = fx
            .change()
            .execute(ChangePasswordInput {
                username: "alice".into(),
                old_password: "wrong".into(),
                new_password: "new password".into(),
            })
            .await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_change_password_unknown_user_same_error() {
        let fx = Fixture::new().await;

        let err = fx
            .change()
            .execute(ChangePasswordInput {
                username: "nobody".into(),
                old_password: "old password".into(),
                new_password: "new password".into(),
            })
            .await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }
}
