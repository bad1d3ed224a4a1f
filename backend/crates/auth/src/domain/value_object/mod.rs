//! Value Objects
//!
//! Validated wrapper types for the auth domain.

pub mod email;
pub mod user_name;
pub mod user_password;
