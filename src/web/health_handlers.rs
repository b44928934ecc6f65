// src/web/health_handlers.rs
use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if db::health_check(&state.db_pool).await {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        tracing::error!("Health check falhou: base de dados indisponível.");
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "unavailable" })))
    }
}
