//! Bearer Token Middleware
//!
//! Guards protected routes. A request with no bearer token is rejected
//! with 401; a request whose token fails verification is rejected with
//! 403. On success the resolved principal is inserted into request
//! extensions for handlers to pick up.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::error::AuthError;

/// Authenticated caller, resolved from the bearer token
#[derive(Debug, Clone, Copy)]
pub struct Principal {
    pub user_id: UserId,
}

/// State for the bearer gate middleware
#[derive(Clone)]
pub struct AuthGateState {
    config: Arc<AuthConfig>,
}

impl AuthGateState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Require a valid bearer token
///
/// Only the `Bearer` scheme is recognized; any other Authorization
/// header counts as a missing token.
pub async fn require_bearer(
    State(gate): State<AuthGateState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers()).ok_or(AuthError::MissingToken)?;

    let user_id = TokenCodec::new(Arc::clone(&gate.config)).verify(token)?;

    req.extensions_mut().insert(Principal { user_id });

    Ok(next.run(req).await)
}

/// Pull the token out of an `Authorization: Bearer ...` header
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_present() {
        let headers = headers_with("Bearer abc.123.sig");
        assert_eq!(extract_bearer(&headers), Some("abc.123.sig"));
    }

    #[test]
    fn test_extract_bearer_absent() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_bearer_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_extract_bearer_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer(&headers), None);
    }
}
