// handlers/public/auth/sign_in.rs - POST /api/v1/auth/sign-in handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignedInUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: SignedInUser,
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// POST /api/v1/auth/sign-in - Exchange the bootstrap admin credentials for a JWT
///
/// Expected Input:
/// ```json
/// { "username": "admin", "password": "..." }
/// ```
///
/// Wrong credentials, or a deployment without configured admin credentials,
/// answer 401.
pub async fn sign_in_post(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<SignInResponse> {
    let Json(request) = payload?;

    let admin = state
        .admin
        .as_ref()
        .filter(|admin| admin.matches(&request.username, &request.password))
        .ok_or_else(|| {
            warn!("Rejected sign-in for '{}'", request.username);
            ApiError::unauthorized("Invalid credentials")
        })?;

    let (token, claims) = state.tokens.issue(&admin.username, "admin")?;
    info!("Issued token for '{}'", admin.username);

    Ok(ApiResponse::success(SignInResponse {
        user: SignedInUser {
            id: admin.username.clone(),
            name: admin.username.clone(),
            role: claims.role.clone(),
        },
        expires_at: claims.expires_at(),
        token,
    }))
}
