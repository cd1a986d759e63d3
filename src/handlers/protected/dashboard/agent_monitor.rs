// handlers/protected/dashboard/agent_monitor.rs - GET /api/v1/dashboard/agent-monitor handler

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::handlers::protected::agent_status::AgentStatusQuery;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::dashboard_service::AgentMonitorSummary;
use crate::state::AppState;

/// GET /api/v1/dashboard/agent-monitor?workspace_id=..&brand_id=.. - Presence counters
pub async fn agent_monitor_get(
    State(state): State<AppState>,
    query: Result<Query<AgentStatusQuery>, QueryRejection>,
) -> ApiResult<AgentMonitorSummary> {
    let Query(query) = query?;
    let query = query.require_ids()?;
    let summary = state
        .dashboard
        .agent_monitor(&query.workspace_id, &query.brand_id)
        .await;
    Ok(ApiResponse::success(summary))
}
