//! Error type for HTTP handlers.

use std::error::Error;
use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::post::ValidationError;
use crate::repository::RepositoryError;
use crate::scenario::ForcedFailure;

/// Everything a handler can answer with besides success.
///
/// Rendered as `{"detail": "<message>"}` with the status from
/// [`ApiError::status_code`].
#[derive(Debug)]
pub enum ApiError {
    /// Failure requested through `error_scenario`.
    Forced(ForcedFailure),
    /// No post with this id. Held as text so integers outside the id range
    /// are reported as written.
    NotFound(String),
    /// Query, path or body could not be parsed, or a field was empty.
    Validation(String),
    /// Repository failure other than a missing post.
    Repository(RepositoryError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Forced(failure) => write!(f, "{}", failure),
            ApiError::NotFound(id) => write!(f, "Post {} not found", id),
            ApiError::Validation(msg) => f.write_str(msg),
            ApiError::Repository(e) => write!(f, "repository error: {}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Repository(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ApiError::NotFound(id.to_string()),
            other => ApiError::Repository(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forced(ForcedFailure::ServerFault) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Forced(ForcedFailure::ServiceUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Forced(ForcedFailure::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Forced(ForcedFailure::Validation) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "detail": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
