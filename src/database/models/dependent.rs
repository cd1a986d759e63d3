use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Resource kinds that hang off a brand and guard its hard deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependentKind {
    Workspace,
    Bot,
    Agent,
}

impl DependentKind {
    pub const ALL: [DependentKind; 3] = [DependentKind::Workspace, DependentKind::Bot, DependentKind::Agent];

    pub fn table(&self) -> &'static str {
        match self {
            DependentKind::Workspace => "brand_workspaces",
            DependentKind::Bot => "brand_bots",
            DependentKind::Agent => "brand_agents",
        }
    }

    /// Collection name used in URLs and messages
    pub fn plural(&self) -> &'static str {
        match self {
            DependentKind::Workspace => "workspaces",
            DependentKind::Bot => "bots",
            DependentKind::Agent => "agents",
        }
    }
}

impl FromStr for DependentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workspaces" | "workspace" => Ok(DependentKind::Workspace),
            "bots" | "bot" => Ok(DependentKind::Bot),
            "agents" | "agent" => Ok(DependentKind::Agent),
            other => Err(format!("unknown brand resource '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DependentRecord {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDependent {
    pub id: Option<String>,
    pub name: String,
}

/// Row counts across the whole store, for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceTotals {
    pub brand_count: i64,
    pub workspace_count: i64,
    pub bot_count: i64,
    pub agent_count: i64,
}
