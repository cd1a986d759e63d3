use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a brand. `Deleted` is only ever set together with `deleted_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Active,
    Inactive,
    Deleted,
}

impl BrandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandStatus::Active => "active",
            BrandStatus::Inactive => "inactive",
            BrandStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BrandStatus::Active),
            "inactive" => Ok(BrandStatus::Inactive),
            "deleted" => Ok(BrandStatus::Deleted),
            other => Err(format!("unknown brand status '{}'", other)),
        }
    }
}

/// A customer brand that owns workspaces, bots and agents.
///
/// The external API token is never serialized with the brand itself; it is
/// served separately through [`BrandToken`].
#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub api_url: String,
    #[serde(skip_serializing)]
    pub api_token: String,
    pub status: BrandStatus,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the brand belongs in "active brand" listings
    pub fn is_active(&self) -> bool {
        !self.is_deleted() && self.status != BrandStatus::Deleted
    }
}

/// Input for creating a brand
#[derive(Debug, Clone, Deserialize)]
pub struct NewBrand {
    pub id: Option<String>,
    pub name: String,
    pub api_url: String,
    #[serde(alias = "token")]
    pub api_token: String,
    pub status: Option<BrandStatus>,
}

/// Partial update of a brand; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandPatch {
    pub name: Option<String>,
    pub api_url: Option<String>,
    #[serde(alias = "token")]
    pub api_token: Option<String>,
    pub status: Option<BrandStatus>,
}

/// Credential used to call the brand's external status source
#[derive(Debug, Clone, Serialize)]
pub struct BrandToken {
    pub token: String,
    #[serde(skip_serializing)]
    pub api_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Resources still attached to a brand; any non-zero count blocks a hard delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentCounts {
    pub workspaces: i64,
    pub bots: i64,
    pub agents: i64,
}

impl DependentCounts {
    pub fn is_empty(&self) -> bool {
        self.workspaces == 0 && self.bots == 0 && self.agents == 0
    }

    pub fn total(&self) -> i64 {
        self.workspaces + self.bots + self.agents
    }
}

impl fmt::Display for DependentCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} workspaces, {} bots, {} agents",
            self.workspaces, self.bots, self.agents
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(status: BrandStatus, deleted_at: Option<DateTime<Utc>>) -> Brand {
        let now = Utc::now();
        Brand {
            id: "brand_1".into(),
            name: "CS System 009".into(),
            api_url: "https://api.cs-system-009.cxgenie.app".into(),
            api_token: "secret".into(),
            status,
            deleted_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [BrandStatus::Active, BrandStatus::Inactive, BrandStatus::Deleted] {
            assert_eq!(status.as_str().parse::<BrandStatus>(), Ok(status));
        }
        assert!("archived".parse::<BrandStatus>().is_err());
    }

    #[test]
    fn soft_deleted_brand_is_not_active() {
        assert!(brand(BrandStatus::Active, None).is_active());
        assert!(brand(BrandStatus::Inactive, None).is_active());
        assert!(!brand(BrandStatus::Deleted, Some(Utc::now())).is_active());
    }

    #[test]
    fn token_is_not_serialized_with_brand() {
        let v = serde_json::to_value(brand(BrandStatus::Active, None)).unwrap();
        assert!(v.get("api_token").is_none());
        assert_eq!(v["status"], "active");
        assert!(v["deleted_at"].is_null());
    }

    #[test]
    fn dependent_counts_message() {
        let counts = DependentCounts { workspaces: 2, bots: 0, agents: 5 };
        assert!(!counts.is_empty());
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.to_string(), "2 workspaces, 0 bots, 5 agents");
        assert!(DependentCounts::default().is_empty());
    }
}
