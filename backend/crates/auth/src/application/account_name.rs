//! Account Name Use Case
//!
//! Resolves the display name for an authenticated principal. A valid
//! token whose user row has since disappeared yields a 404.

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Output of the account name lookup
#[derive(Debug)]
pub struct AccountNameOutput {
    pub name: String,
}

/// Account name lookup use case
pub struct AccountNameUseCase<R> {
    repo: Arc<R>,
}

impl<R: UserRepository> AccountNameUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<AccountNameOutput> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AccountNameOutput {
            name: user.username.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_account_name_found() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());

        let out = RegisterUseCase::new(Arc::clone(&repo), config)
            .execute(RegisterInput {
                username: "alice".into(),
                email: "alice@example.com".into(),
                password: "pw1".into(),
            })
            .await
            .unwrap();

        let name = AccountNameUseCase::new(repo)
            .execute(&out.user_id)
            .await
            .unwrap();
        assert_eq!(name.name, "alice");
    }

    #[tokio::test]
    async fn test_account_name_user_gone() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let err = AccountNameUseCase::new(repo).execute(&UserId::new()).await;
        assert!(matches!(err, Err(AuthError::UserNotFound)));
    }
}
