// handlers/protected/brand/create.rs - POST /api/v1/brands handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;

use crate::database::models::{Brand, NewBrand};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/v1/brands - Register a brand and its status API credential
///
/// Expected Input:
/// ```json
/// {
///   "id": "brand_1",                 // optional, generated when absent
///   "name": "CS System 009",
///   "api_url": "https://api.cs-system-009.cxgenie.app",
///   "api_token": "eyJ...",
///   "status": "active"               // optional
/// }
/// ```
pub async fn brand_create(
    State(state): State<AppState>,
    payload: Result<Json<NewBrand>, JsonRejection>,
) -> ApiResult<Brand> {
    let Json(input) = payload?;
    let brand = state.brands.create_brand(input).await?;
    Ok(ApiResponse::created(brand))
}
