// handlers/protected/brand/soft_delete.rs - PUT /api/v1/brands/:id/soft-delete handler

use axum::extract::{Path, State};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::brand_service::SoftDeleteReceipt;
use crate::state::AppState;

/// PUT /api/v1/brands/:id/soft-delete - Tombstone a brand
///
/// A second call answers 400 `ALREADY_DELETED` and keeps the first timestamp.
pub async fn brand_soft_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SoftDeleteReceipt> {
    Ok(ApiResponse::success(state.brands.soft_delete_brand(&id).await?))
}
