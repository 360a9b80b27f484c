use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parcel_core::CoreError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    AuthenticationError(String),
    #[error("{message}")]
    ValidationError {
        message: String,
        field: Option<String>,
    },
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::ValidationError { message, field } => (StatusCode::BAD_REQUEST, message, field),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg, None),
            // Duplicate handles and profiles are reported as bad requests.
            AppError::ConflictError(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string(), None)
            }
        };

        (status, Json(ErrorBody { message, field })).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => AppError::NotFoundError(err.to_string()),
            CoreError::Validation { field, message } => AppError::ValidationError {
                message: format!("{field} {message}"),
                field: Some(field),
            },
            CoreError::Conflict(msg) => AppError::ConflictError(msg),
            CoreError::AuthFailure(msg) => AppError::AuthenticationError(msg),
            CoreError::InvalidTransition { .. } => AppError::ValidationError {
                message: err.to_string(),
                field: Some("status".to_string()),
            },
            CoreError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::ValidationError {
            message: rejection.body_text(),
            field: None,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError {
            message: rejection.body_text(),
            field: None,
        }
    }
}
