// ABOUTME: Shared API response envelope
// ABOUTME: Every body is `success`, an optional `message`, and the payload keys flattened alongside

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{Map, Value};

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T = Map<String, Value>> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse {
    /// Success with no payload beyond the message
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(Map::new()).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
