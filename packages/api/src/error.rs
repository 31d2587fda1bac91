// ABOUTME: Error type returned by every handler and its mapping to HTTP responses
// ABOUTME: Storage failures are logged in full and surface only a generic message

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use atelier_auth::AuthError;
use atelier_core::ValidationError;
use atelier_storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// `context` is what the client sees; `source` only reaches the log
    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<ValidationError>>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".to_string())
    }

    /// Wrap a storage failure with the message shown to the client
    pub fn storage(context: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Storage { context, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingPassword => AppError::BadRequest(err.to_string()),
            AuthError::InvalidPassword | AuthError::MissingToken | AuthError::InvalidToken => {
                AppError::Unauthorized(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        info!(error = %rejection, "Rejected request body");
        AppError::BadRequest("Invalid request body".to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        info!(error = %rejection, "Rejected query string");
        AppError::BadRequest("Invalid query parameters".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Storage { context, source } => {
                error!(error = %source, "{}", context);
            }
            AppError::Internal(message) => {
                error!("{}", message);
            }
            _ => {
                info!(status = %status.as_u16(), error = %self, "API error response");
            }
        }

        let (message, errors) = match self {
            AppError::Validation(errors) => ("Validation failed".to_string(), Some(errors)),
            other => (other.to_string(), None),
        };

        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
