//! User Repository Trait
//!
//! Persistence seam for the auth domain. The Postgres implementation
//! lives in `infra::postgres`.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::UserPassword;
use kernel::error::app_error::AppResult;
use kernel::id::UserId;

/// Repository abstraction for user accounts
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Look up a user by id
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;

    /// Look up a user by username (exact match)
    async fn find_by_username(&self, username: &UserName) -> AppResult<Option<User>>;

    /// Check whether the username or email is already registered
    ///
    /// A single combined check so registration reports one generic
    /// conflict without revealing which field collided.
    async fn username_or_email_taken(&self, username: &UserName, email: &Email)
        -> AppResult<bool>;

    /// Replace the stored password hash for a user
    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AppResult<()>;
}
