//! Application Layer
//!
//! Use cases for registration, login, password change, and account
//! lookup, plus the token codec and auth configuration.

pub mod account_name;
pub mod change_password;
pub mod config;
pub mod login;
pub mod register;
pub mod token;

pub use account_name::AccountNameUseCase;
pub use change_password::ChangePasswordUseCase;
pub use config::AuthConfig;
pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use token::TokenCodec;
