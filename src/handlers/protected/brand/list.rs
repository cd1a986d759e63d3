// handlers/protected/brand/list.rs - GET /api/v1/brands handler

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;

use crate::database::models::Brand;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Include soft-deleted brands
    #[serde(default)]
    pub include_deleted: bool,
}

/// GET /api/v1/brands - Active brands, newest first
pub async fn brand_list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Vec<Brand>> {
    let Query(query) = query?;
    let brands = state.brands.list_brands(query.include_deleted).await?;
    Ok(ApiResponse::success(brands))
}
