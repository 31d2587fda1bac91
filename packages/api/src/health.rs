use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use atelier_storage::select_backend;

use crate::AppState;

/// Liveness plus the backend the next request would use
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let backend = select_backend(&state.storage_config());

    Json(json!({
        "success": true,
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "atelier",
        "backend": backend.as_str(),
    }))
}
