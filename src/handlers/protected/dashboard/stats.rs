// handlers/protected/dashboard/stats.rs - GET /api/v1/dashboard/stats handler

use axum::extract::State;

use crate::database::models::ResourceTotals;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/dashboard/stats - Active brands plus workspace, bot and agent totals
pub async fn stats_get(State(state): State<AppState>) -> ApiResult<ResourceTotals> {
    Ok(ApiResponse::success(state.dashboard.stats().await?))
}
