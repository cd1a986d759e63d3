// handlers/protected/brand/token.rs - GET /api/v1/brands/:id/token handler

use axum::extract::{Path, State};

use crate::database::models::BrandToken;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/brands/:id/token - The brand's status API token
pub async fn brand_token(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<BrandToken> {
    Ok(ApiResponse::success(state.brands.get_brand_token(&id).await?))
}
