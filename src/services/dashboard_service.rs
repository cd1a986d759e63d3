use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::database::models::ResourceTotals;
use crate::database::{DatabaseError, Store};
use crate::services::agent_status::{AgentStatusAggregator, AgentStatuses};

#[derive(Debug, Clone, Serialize)]
pub struct AgentMonitorSummary {
    pub total_agents: usize,
    pub online_agents: usize,
    pub available_agents: usize,
    pub busy_agents: usize,
    pub offline_agents: usize,
    pub source: &'static str,
    pub last_updated: DateTime<Utc>,
}

impl AgentMonitorSummary {
    pub fn from_statuses(statuses: &AgentStatuses) -> Self {
        let presence: Vec<Presence> = match statuses {
            AgentStatuses::Live(agents) => agents.iter().map(Presence::from_value).collect(),
            AgentStatuses::Fallback(agents) => agents
                .iter()
                .map(|a| Presence {
                    online: a.online,
                    available: a.available,
                    busy: a.status.eq_ignore_ascii_case("busy"),
                })
                .collect(),
        };

        let total_agents = presence.len();
        let online_agents = presence.iter().filter(|p| p.online).count();

        Self {
            total_agents,
            online_agents,
            available_agents: presence.iter().filter(|p| p.available).count(),
            busy_agents: presence.iter().filter(|p| p.busy).count(),
            offline_agents: total_agents - online_agents,
            source: statuses.source(),
            last_updated: Utc::now(),
        }
    }
}

struct Presence {
    online: bool,
    available: bool,
    busy: bool,
}

impl Presence {
    // Live payloads are opaque; read whichever alias the upstream sends
    fn from_value(agent: &Value) -> Self {
        let flag = |a: &str, b: &str| {
            agent
                .get(a)
                .or_else(|| agent.get(b))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        };

        Self {
            online: flag("online", "is_online"),
            available: flag("available", "is_available"),
            busy: agent
                .get("status")
                .and_then(Value::as_str)
                .map(|s| s.eq_ignore_ascii_case("busy"))
                .unwrap_or(false),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn Store>,
    aggregator: Arc<AgentStatusAggregator>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn Store>, aggregator: Arc<AgentStatusAggregator>) -> Self {
        Self { store, aggregator }
    }

    pub async fn stats(&self) -> Result<ResourceTotals, DatabaseError> {
        self.store.resource_totals().await
    }

    pub async fn agent_monitor(&self, workspace_id: &str, brand_id: &str) -> AgentMonitorSummary {
        let statuses = self.aggregator.get_agent_status(workspace_id, brand_id).await;
        AgentMonitorSummary::from_statuses(&statuses)
    }
}
