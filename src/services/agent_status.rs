use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::database::Store;

/// One agent's presence as rendered by the monitor dashboards.
///
/// `online`/`is_online` and `available`/`is_available` are kept as duplicate
/// aliases for older clients and always carry the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatusRecord {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub username: String,
    pub status: String,
    pub online: bool,
    pub is_online: bool,
    pub available: bool,
    pub is_available: bool,
    pub last_activity: String,
}

impl AgentStatusRecord {
    pub fn new(
        id: &str,
        name: &str,
        user_id: &str,
        username: &str,
        status: &str,
        online: bool,
        available: bool,
        last_activity: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            user_id: user_id.to_string(),
            username: username.to_string(),
            status: status.to_string(),
            online,
            is_online: online,
            available,
            is_available: available,
            last_activity: last_activity.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatusSourceError {
    #[error("brand credential unavailable: {0}")]
    Credential(String),
    #[error("invalid status endpoint: {0}")]
    Endpoint(String),
    #[error("status source timed out after {0:?}")]
    Timeout(Duration),
    #[error("status source returned HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Body(String),
}

/// Somewhere agent status lists come from
#[async_trait]
pub trait StatusSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, brand_id: &str, workspace_id: &str) -> Result<Vec<Value>, StatusSourceError>;
}

/// Calls the brand's own status API with the brand's bearer token
pub struct RemoteStatusSource {
    store: Arc<dyn Store>,
    client: reqwest::Client,
    path: String,
    timeout: Duration,
}

impl RemoteStatusSource {
    pub fn new(store: Arc<dyn Store>, path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            store,
            client: reqwest::Client::new(),
            path: path.into(),
            timeout,
        }
    }

    fn classify(&self, err: reqwest::Error) -> StatusSourceError {
        if err.is_timeout() {
            StatusSourceError::Timeout(self.timeout)
        } else {
            StatusSourceError::Transport(err)
        }
    }
}

/// Join the brand base URL and the status path without dropping any base path
pub fn status_endpoint(api_url: &str, path: &str) -> Result<url::Url, StatusSourceError> {
    let joined = format!(
        "{}/{}",
        api_url.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );
    url::Url::parse(&joined).map_err(|e| StatusSourceError::Endpoint(format!("{}: {}", joined, e)))
}

#[async_trait]
impl StatusSource for RemoteStatusSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(&self, brand_id: &str, workspace_id: &str) -> Result<Vec<Value>, StatusSourceError> {
        let credential = self
            .store
            .get_brand_token(brand_id)
            .await
            .map_err(|e| StatusSourceError::Credential(e.to_string()))?
            .ok_or_else(|| StatusSourceError::Credential(format!("no active brand '{}'", brand_id)))?;

        let endpoint = status_endpoint(&credential.api_url, &self.path)?;
        debug!("Fetching agent status from {} for workspace {}", endpoint, workspace_id);

        let response = self
            .client
            .get(endpoint.as_str())
            .query(&[("workspace_id", workspace_id)])
            .bearer_auth(&credential.token)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if response.status() != StatusCode::OK {
            return Err(StatusSourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(agents)) => Ok(agents),
            Ok(_) => Err(StatusSourceError::Body("expected a JSON array".to_string())),
            Err(e) => Err(StatusSourceError::Body(e.to_string())),
        }
    }
}

/// Fixed synthetic agents served when the live source is unavailable.
/// Deterministic: every call yields the same five records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStatusSource;

impl FallbackStatusSource {
    pub fn records(&self) -> Vec<AgentStatusRecord> {
        vec![
            AgentStatusRecord::new("agent_1", "Agent Alice", "user_1", "alice", "Available", true, true, "2024-01-15T10:30:00Z"),
            AgentStatusRecord::new("agent_2", "Agent Bob", "user_2", "bob", "Busy", true, false, "2024-01-15T10:25:00Z"),
            AgentStatusRecord::new("agent_3", "Agent Charlie", "user_3", "charlie", "Available", false, true, "2024-01-15T09:45:00Z"),
            AgentStatusRecord::new("agent_4", "Agent David", "user_4", "david", "Offline", false, false, "2024-01-15T08:30:00Z"),
            AgentStatusRecord::new("agent_5", "Agent Eve", "user_5", "eve", "Available", true, true, "2024-01-15T10:28:00Z"),
        ]
    }
}

#[async_trait]
impl StatusSource for FallbackStatusSource {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn fetch(&self, _brand_id: &str, _workspace_id: &str) -> Result<Vec<Value>, StatusSourceError> {
        self.records()
            .into_iter()
            .map(|r| serde_json::to_value(r).map_err(|e| StatusSourceError::Body(e.to_string())))
            .collect()
    }
}

/// Agent statuses as served to callers: the live payload untouched, or the fallback set
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AgentStatuses {
    Live(Vec<Value>),
    Fallback(Vec<AgentStatusRecord>),
}

impl AgentStatuses {
    pub fn source(&self) -> &'static str {
        match self {
            AgentStatuses::Live(_) => "live",
            AgentStatuses::Fallback(_) => "fallback",
        }
    }
}

/// Fail-open status lookup: the primary source is tried once under a hard
/// timeout, and any failure is answered with the fallback set. Callers never
/// see an error.
pub struct AgentStatusAggregator {
    primary: Arc<dyn StatusSource>,
    fallback: FallbackStatusSource,
    timeout: Duration,
}

impl AgentStatusAggregator {
    pub fn new(primary: Arc<dyn StatusSource>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: FallbackStatusSource,
            timeout,
        }
    }

    pub async fn get_agent_status(&self, workspace_id: &str, brand_id: &str) -> AgentStatuses {
        let outcome = tokio::time::timeout(self.timeout, self.primary.fetch(brand_id, workspace_id)).await;

        let cause = match outcome {
            Ok(Ok(agents)) => return AgentStatuses::Live(agents),
            Ok(Err(e)) => e,
            Err(_) => StatusSourceError::Timeout(self.timeout),
        };

        warn!(
            "Serving fallback agent status for brand {} workspace {} ({} source failed: {})",
            brand_id,
            workspace_id,
            self.primary.name(),
            cause
        );
        AgentStatuses::Fallback(self.fallback.records())
    }
}
