//! Request Extractors
//!
//! Boundary extractors shared by the HTTP crates.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor with unified error mapping
///
/// Behaves like [`axum::Json`] but turns every rejection (malformed body,
/// missing or mistyped fields, wrong content type) into a 400 [`AppError`]
/// with the standard `{"error": ...}` body. axum's stock extractor answers
/// data errors with 422, which is not part of this API's contract.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

/// Path parameter extractor with unified error mapping
///
/// Behaves like [`axum::extract::Path`] but answers an unparseable
/// parameter (e.g. a malformed UUID) with a 400 [`AppError`] and the
/// standard `{"error": ...}` body instead of axum's plain-text rejection.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use serde::Deserialize;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
        count: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let req = json_request(r#"{"name":"fern","count":3}"#);
        let AppJson(payload) = AppJson::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name, "fern");
        assert_eq!(payload.count, 3);
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let req = json_request(r#"{"name":"fern"}"#);
        let err = AppJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let req = json_request("not json");
        let err = AppJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status_code(), 400);
    }

    async fn show(AppPath(id): AppPath<Uuid>) -> String {
        id.to_string()
    }

    fn path_router() -> Router {
        Router::new().route("/items/{id}", get(show))
    }

    #[tokio::test]
    async fn test_valid_path_param() {
        let id = Uuid::new_v4();
        let response = path_router()
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unparseable_path_param_is_json_400() {
        let response = path_router()
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("error").is_some());
    }
}
