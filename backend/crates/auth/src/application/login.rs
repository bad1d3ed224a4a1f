//! Login Use Case
//!
//! Verifies credentials and issues a bearer token. Unknown username and
//! wrong password produce the same error.

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Input for login
#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Output of a successful login
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: TokenCodec,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenCodec::new(Arc::clone(&config));
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.username.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("All fields are required".into()));
        }

        let username = UserName::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    async fn setup() -> (LoginUseCase<InMemoryUserRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());

        RegisterUseCase::new(Arc::clone(&repo), Arc::clone(&config))
            .execute(RegisterInput {
                username: "alice".into(),
                email: "alice@example.com".into(),
                password: "pw1".into(),
            })
            .await
            .unwrap();

        (LoginUseCase::new(repo, Arc::clone(&config)), config)
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let (uc, config) = setup().await;

        let out = uc
            .execute(LoginInput {
                username: "alice".into(),
                password: "pw1".into(),
            })
            .await
            .unwrap();

        let verified = TokenCodec::new(config).verify(&out.token).unwrap();
        assert_eq!(verified, out.user_id);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (uc, _) = setup().await;

        let err = uc
            .execute(LoginInput {
                username: "nobody".into(),
                password: "pw1".into(),
            })
            .await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (uc, _) = setup().await;

        let err = uc
            .execute(LoginInput {
                username: "alice".into(),
                password: "wrong".into(),
            })
            .await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_username_is_case_sensitive() {
        let (uc, _) = setup().await;

        let err = uc
            .execute(LoginInput {
                username: "Alice".into(),
                password: "pw1".into(),
            })
            .await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }
}
