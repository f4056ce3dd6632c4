//! Mapping from store results and framework rejections to HTTP responses.

use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::store::StoreError;
use crate::student::ValidationError;

/// Error type for route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The store refused or could not satisfy the request.
    Store(StoreError),
    /// The request did not parse or broke a field rule.
    Validation(String),
    /// A missing ID, reported with the text of the route that looked it up.
    Missing {
        source: StoreError,
        message: &'static str,
    },
}

impl ApiError {
    /// Map this error to an HTTP status code.
    ///
    /// Lookup and conflict outcomes keep status 200 and carry an `error`
    /// body; only malformed requests and internal faults change the status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(err) if err.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::LockPoisoned(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) | ApiError::Missing { .. } => StatusCode::OK,
        }
    }

    /// Replace the text of a missing-ID outcome; other errors pass through.
    pub fn missing_id_reads(self, message: &'static str) -> Self {
        match self {
            ApiError::Store(err @ StoreError::NotFound(_)) => ApiError::Missing {
                source: err,
                message,
            },
            other => other,
        }
    }

    fn body(&self) -> serde_json::Value {
        if self.status_code() == StatusCode::UNPROCESSABLE_ENTITY {
            json!({ "detail": self.to_string() })
        } else {
            json!({ "error": self.to_string() })
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Store(err) => write!(f, "{}", err),
            ApiError::Validation(msg) => f.write_str(msg),
            ApiError::Missing { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Store(err) | ApiError::Missing { source: err, .. } => Some(err),
            ApiError::Validation(_) => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
