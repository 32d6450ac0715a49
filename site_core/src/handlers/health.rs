//! Liveness endpoint

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
        "catalog_entries": state.catalog.len(),
        "theme": state.theme.mode().as_str(),
        "submission_status": state.submitter.status().as_str(),
    }))
}
