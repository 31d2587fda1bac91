// ABOUTME: HTTP handler for admin login
// ABOUTME: Exchanges the shared admin password for a bearer token

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub password: Option<String>,
}

/// POST /api/admin/auth
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<serde_json::Value>> {
    let Json(request) = payload?;

    let token = state
        .auth
        .login(request.password.as_deref().unwrap_or_default())?;

    info!("Admin login succeeded");
    Ok(ApiResponse::success(json!({ "token": token })).with_message("Authentication successful"))
}
