//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_domain::error::DeviceHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every way an API call can fail, mapped to a status code on the way out.
pub enum ApiError {
    /// Raised by the application service.
    Domain(DeviceHubError),
    /// The `{id}` path segment is not a UUID.
    InvalidId,
    /// The request body is not valid JSON or misses a required field.
    InvalidBody(JsonRejection),
    /// The query string could not be decoded.
    InvalidQuery(QueryRejection),
}

impl From<DeviceHubError> for ApiError {
    fn from(err: DeviceHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(err @ DeviceHubError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(err @ DeviceHubError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::InvalidId => (StatusCode::BAD_REQUEST, "Invalid ID".to_string()),
            Self::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::InvalidQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        tracing::debug!(status = status.as_u16(), error = %message, "request failed");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
