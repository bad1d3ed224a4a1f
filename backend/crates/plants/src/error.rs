//! Plant Error Types
//!
//! The not-found message is shared by the genuinely-missing and the
//! not-owned cases so responses never reveal whether a plant id exists.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Plant-specific result type alias
pub type PlantResult<T> = Result<T, PlantError>;

/// Plant-specific error variants
#[derive(Debug, Error)]
pub enum PlantError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Plant missing, or owned by a different user
    #[error("Plant not found or not owned by user")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlantError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlantError::Validation(_) => StatusCode::BAD_REQUEST,
            PlantError::NotFound => StatusCode::NOT_FOUND,
            PlantError::Database(_) | PlantError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlantError::Validation(_) => ErrorKind::BadRequest,
            PlantError::NotFound => ErrorKind::NotFound,
            PlantError::Database(_) | PlantError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Store failures keep their detail server-side only
            PlantError::Database(_) | PlantError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PlantError::Database(e) => {
                tracing::error!(error = %e, "Plant database error");
            }
            PlantError::Internal(msg) => {
                tracing::error!(message = %msg, "Plant internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Plant error");
            }
        }
    }
}

impl IntoResponse for PlantError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PlantError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => PlantError::Validation(err.message().to_string()),
            ErrorKind::NotFound => PlantError::NotFound,
            _ => PlantError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PlantError::Validation("Missing required fields".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PlantError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PlantError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_is_shared() {
        // Missing and not-owned must be indistinguishable
        assert_eq!(
            PlantError::NotFound.to_string(),
            "Plant not found or not owned by user"
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = PlantError::Internal("pool exhausted".into());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
