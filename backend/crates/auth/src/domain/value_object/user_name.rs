//! User Name Value Object
//!
//! Identity is case-sensitive: `Alice` and `alice` are two different
//! accounts, and uniqueness checks compare the stored value exactly.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum username length in Unicode code points
const USER_NAME_MAX_LENGTH: usize = 64;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request("Username contains invalid characters"));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the user name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserName {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        UserName::new(s)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Alice Smith").is_ok());
        assert!(UserName::new("植物好き").is_ok());
    }

    #[test]
    fn test_user_name_invalid() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("a\u{0007}b").is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_case_is_preserved() {
        // Identity is case-sensitive, the stored value is the given value
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_ne!(name, UserName::new("alice").unwrap());
    }
}
