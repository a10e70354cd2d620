use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

/// Liveness probe. `ai_enabled` reflects whether the Gemini provider was
/// configured at startup.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "ai_enabled": state.ai_enabled(),
    }))
}
