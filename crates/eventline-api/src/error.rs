//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use eventline_core::error::{AppError, ErrorKind};

use crate::dto::response::MessageResponse;

/// Newtype carrying an [`AppError`] out of a handler.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts from
/// `AppError` automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        // NotFound and Conflict map to 400: this API keeps every client
        // fault under one status.
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::NotFound => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::InvalidCredentials | ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::AccountLocked => StatusCode::FORBIDDEN,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 5xx details stay in the log; the client sees a generic message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            err.message
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
