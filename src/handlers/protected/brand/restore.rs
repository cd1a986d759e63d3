// handlers/protected/brand/restore.rs - PUT /api/v1/brands/:id/restore handler

use axum::extract::{Path, State};

use crate::database::models::Brand;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn brand_restore(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Brand> {
    Ok(ApiResponse::success(state.brands.restore_brand(&id).await?))
}
