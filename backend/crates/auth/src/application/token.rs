//! Bearer Token Codec
//!
//! Issues and verifies stateless bearer tokens of the form:
//!
//! ```text
//! {user_uuid}.{expiry_unix_ms}.{base64url(HMAC-SHA256(secret, "{user_uuid}.{expiry_unix_ms}"))}
//! ```
//!
//! The payload is authenticated, not encrypted. Verification recomputes
//! the HMAC in constant time and then checks the expiry, so a tampered
//! token and an expired token are indistinguishable to the caller.

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use sha2::Sha256;
use std::sync::Arc;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Stateless token issuer and verifier
#[derive(Clone)]
pub struct TokenCodec {
    config: Arc<AuthConfig>,
}

impl TokenCodec {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for a user, expiring one TTL from now
    pub fn issue(&self, user_id: &UserId) -> String {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token anchored at an explicit issue time
    pub fn issue_at(&self, user_id: &UserId, issued_at: DateTime<Utc>) -> String {
        let expires_at = issued_at + self.config.token_ttl();
        let payload = format!("{}.{}", user_id.as_uuid(), expires_at.timestamp_millis());
        let signature = self.sign(&payload);
        format!("{}.{}", payload, signature)
    }

    /// Verify a token and return the user it was issued to
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit current time
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let mut parts = token.splitn(3, '.');
        let (uuid_part, exp_part, sig_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(u), Some(e), Some(s)) if !u.is_empty() && !e.is_empty() && !s.is_empty() => {
                (u, e, s)
            }
            _ => return Err(AuthError::InvalidToken),
        };

        let payload = format!("{}.{}", uuid_part, exp_part);
        let signature = URL_SAFE_NO_PAD
            .decode(sig_part)
            .map_err(|_| AuthError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(self.config.token_secret())
            .map_err(|_| AuthError::InvalidToken)?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        // Signature is valid, so the payload fields are trusted from here
        let expires_at_ms: i64 = exp_part.parse().map_err(|_| AuthError::InvalidToken)?;
        if now.timestamp_millis() >= expires_at_ms {
            return Err(AuthError::InvalidToken);
        }

        let uuid = Uuid::parse_str(uuid_part).map_err(|_| AuthError::InvalidToken)?;
        Ok(UserId::from_uuid(uuid))
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.config.token_secret())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}
