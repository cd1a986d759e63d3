// handlers/protected/brand/update.rs - PUT /api/v1/brands/:id handler

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;

use crate::database::models::{Brand, BrandPatch};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// PUT /api/v1/brands/:id - Partial update; absent fields are left as they are
pub async fn brand_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BrandPatch>, JsonRejection>,
) -> ApiResult<Brand> {
    let Json(patch) = payload?;
    Ok(ApiResponse::success(state.brands.update_brand(&id, patch).await?))
}
