// handlers/protected/system/settings.rs - GET/PUT /api/v1/system/settings handlers

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;

use crate::database::models::SystemSettings;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/system/settings - Saved settings, or defaults when none were saved
pub async fn settings_get(State(state): State<AppState>) -> ApiResult<SystemSettings> {
    Ok(ApiResponse::success(state.settings.get_settings().await?))
}

/// PUT /api/v1/system/settings - Replace the settings record (camelCase body)
pub async fn settings_put(
    State(state): State<AppState>,
    payload: Result<Json<SystemSettings>, JsonRejection>,
) -> ApiResult<SystemSettings> {
    let Json(settings) = payload?;
    Ok(ApiResponse::success(state.settings.update_settings(settings).await?))
}
