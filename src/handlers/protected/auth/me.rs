// handlers/protected/auth/me.rs - GET /api/v1/auth/me handler

use axum::Extension;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/v1/auth/me - Claims carried by the presented token
pub async fn me_get(Extension(user): Extension<AuthUser>) -> ApiResult<AuthUser> {
    Ok(ApiResponse::success(user))
}
