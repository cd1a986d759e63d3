// handlers/public/health.rs - GET /health handler

use axum::extract::State;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /health - Liveness plus a store ping; 503 when the database is unreachable
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    state.store.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::service_unavailable(format!("Database unavailable: {}", e))
    })?;

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "database": "ok"
    })))
}
