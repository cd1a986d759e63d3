// handlers/protected/brand/dependents.rs - GET/POST /api/v1/brands/:id/{workspaces,bots,agents} handlers
//
// One route per kind is registered in app.rs; the kind is bound there.

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;

use crate::database::models::{DependentKind, DependentRecord, NewDependent};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/brands/:id/{kind} - Workspaces, bots or agents of a brand
pub async fn dependents_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
    kind: DependentKind,
) -> ApiResult<Vec<DependentRecord>> {
    Ok(ApiResponse::success(state.brands.list_dependents(&id, kind).await?))
}

/// POST /api/v1/brands/:id/{kind} - Attach a workspace, bot or agent to a brand
pub async fn dependents_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    kind: DependentKind,
    payload: Result<Json<NewDependent>, JsonRejection>,
) -> ApiResult<DependentRecord> {
    let Json(input) = payload?;
    Ok(ApiResponse::created(state.brands.attach_dependent(&id, kind, input).await?))
}
