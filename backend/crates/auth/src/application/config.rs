//! Auth Configuration
//!
//! Holds the token-signing secret, token lifetime, and the optional
//! password pepper. Built once at startup and shared via `Arc`.

use chrono::Duration;
use rand::RngCore;

/// Size of the HMAC signing secret in bytes
pub const TOKEN_SECRET_LEN: usize = 32;

/// Default token lifetime
const DEFAULT_TOKEN_TTL_HOURS: i64 = 1;

/// Auth configuration
#[derive(Clone)]
pub struct AuthConfig {
    token_secret: [u8; TOKEN_SECRET_LEN],
    token_ttl: Duration,
    password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create a config with an explicit signing secret
    pub fn new(token_secret: [u8; TOKEN_SECRET_LEN]) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            password_pepper: None,
        }
    }

    /// Create a config with a randomly generated secret
    ///
    /// Tokens do not survive a restart with a random secret, so this is
    /// only suitable for development and tests.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; TOKEN_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Development configuration (random secret, no pepper)
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Override the token lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.password_pepper = Some(pepper);
        self
    }

    /// Get the token signing secret
    pub fn token_secret(&self) -> &[u8; TOKEN_SECRET_LEN] {
        &self.token_secret
    }

    /// Get the token lifetime
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Get the password pepper, if configured
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
