// handlers/protected/brand/show.rs - GET /api/v1/brands/:id handler

use axum::extract::{Path, State};

use crate::database::models::Brand;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn brand_show(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Brand> {
    Ok(ApiResponse::success(state.brands.get_brand(&id).await?))
}
