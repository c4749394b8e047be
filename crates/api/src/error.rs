//! API error types
//!
//! One enum covers everything a handler can fail with; `status_code()` is
//! the single place where errors map to HTTP statuses, and the envelope is
//! shaped in one `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use vend_analytics::AnalyticsError;
use vend_auth::AuthError;
use vend_dataset::DatasetError;

use crate::response::Envelope;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request parameters
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Malformed date parameter
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Analytics error (validation or computation)
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Auth error (signup/login)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Snapshot unavailable
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Self::Analytics(AnalyticsError::MissingBusinessKey) => StatusCode::BAD_REQUEST,
            Self::Analytics(AnalyticsError::Dataset(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Analytics(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Auth(AuthError::MissingToken)
            | Self::Auth(AuthError::InvalidToken)
            | Self::Auth(AuthError::TokenExpired) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Upstream(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Auth(_) => StatusCode::BAD_REQUEST,
            Self::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::warn!(
            status = %status,
            error = %self,
            "request failed"
        );

        let body = Envelope::error(serde_json::Value::String(self.to_string()));
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Analytics(AnalyticsError::MissingBusinessKey).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidDate("boom".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Analytics(AnalyticsError::MalformedQuery("oops".into())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Auth(AuthError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::EmailExists).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Auth(AuthError::Upstream("down".into())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_dataset_errors_are_service_failures() {
        let err = ApiError::Dataset(DatasetError::SnapshotMissing("gone".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        // Same failure arriving wrapped by the analytics layer
        let err = ApiError::Analytics(AnalyticsError::Dataset(DatasetError::SnapshotMissing(
            "gone".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
