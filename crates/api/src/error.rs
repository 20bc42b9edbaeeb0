//! Mapping of domain errors onto HTTP responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mylearn_domain::UserServiceError;
use tracing::error;

/// Error returned by every handler.
///
/// `NotFound` becomes 404 and `InvalidInput` becomes 400. Everything else is
/// a 500 whose body hides the underlying cause.
#[derive(Debug)]
pub struct ApiError(pub UserServiceError);

impl ApiError {
    /// HTTP status for the wrapped error
    pub fn status(&self) -> StatusCode {
        match self.0 {
            UserServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            UserServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserServiceError> for ApiError {
    fn from(value: UserServiceError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(UserServiceError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if self.0.is_client_error() {
            self.0
        } else {
            error!(error = %self.0, kind = self.0.label(), "request failed");
            UserServiceError::Internal("Internal server error".into())
        };

        (status, Json(body)).into_response()
    }
}
