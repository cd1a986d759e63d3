use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Deployment-wide configuration toggles. The wire format is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub site_name: String,
    pub default_language: String,
    pub timezone: String,
    pub debug_mode: bool,
    pub max_login_attempts: i32,
    pub session_timeout: i32,
    pub email_notifications: bool,
    pub maintenance_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            site_name: "HRM 管理系統".to_string(),
            default_language: "zh-TW".to_string(),
            timezone: "Asia/Taipei".to_string(),
            debug_mode: false,
            max_login_attempts: 5,
            session_timeout: 24,
            email_notifications: true,
            maintenance_mode: false,
        }
    }
}
