// handlers/protected/agent_status.rs - GET /api/v1/agent-status handler

use axum::extract::{rejection::QueryRejection, Query, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::state::AppState;

/// Response header naming where the agent list came from (`live` or `fallback`)
pub const SOURCE_HEADER: &str = "x-agent-status-source";

#[derive(Debug, Deserialize)]
pub struct AgentStatusQuery {
    pub workspace_id: String,
    pub brand_id: String,
}

impl AgentStatusQuery {
    /// Both identifiers must be non-blank
    pub fn require_ids(self) -> Result<Self, ApiError> {
        if self.workspace_id.trim().is_empty() || self.brand_id.trim().is_empty() {
            return Err(ApiError::bad_request("workspace_id and brand_id are required"));
        }
        Ok(self)
    }
}

/// GET /api/v1/agent-status?workspace_id=..&brand_id=.. - Agent presence for a workspace
///
/// Never fails once the query is well-formed: when the brand's status API is
/// unreachable, slow or answers garbage, the fixed fallback list is served.
pub async fn agent_status_get(
    State(state): State<AppState>,
    query: Result<Query<AgentStatusQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let query = query.require_ids()?;

    let statuses = state
        .agent_status
        .get_agent_status(&query.workspace_id, &query.brand_id)
        .await;
    let source = statuses.source();

    let mut response = ApiResponse::success(statuses).into_response();
    response
        .headers_mut()
        .insert(SOURCE_HEADER, HeaderValue::from_static(source));
    Ok(response)
}
