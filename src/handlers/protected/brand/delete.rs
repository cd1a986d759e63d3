// handlers/protected/brand/delete.rs - DELETE /api/v1/brands/:id handler

use axum::extract::{Path, State};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::brand_service::BrandDeletionReceipt;
use crate::state::AppState;

/// DELETE /api/v1/brands/:id - Permanently remove a brand
///
/// Responses:
/// - 200 `{brand_id, brand_name}`
/// - 404 `NOT_FOUND` when the brand does not exist
/// - 409 `CONFLICT` with `details: {workspaces, bots, agents}` while
///   dependents remain
pub async fn brand_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BrandDeletionReceipt> {
    Ok(ApiResponse::success(state.brands.delete_brand(&id).await?))
}
