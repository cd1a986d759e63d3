use std::sync::Arc;
use tracing::info;

use crate::database::models::SystemSettings;
use crate::database::{DatabaseError, Store};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings: {0}")]
    Invalid(String),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// The single deployment-wide settings record
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn Store>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Current settings, or the built-in defaults when nothing was saved yet
    pub async fn get_settings(&self) -> Result<SystemSettings, SettingsError> {
        Ok(self.store.get_settings().await?.unwrap_or_default())
    }

    pub async fn update_settings(&self, settings: SystemSettings) -> Result<SystemSettings, SettingsError> {
        validate_settings(&settings)?;
        self.store.upsert_settings(&settings).await?;
        info!(
            "Updated system settings (site {}, maintenance {})",
            settings.site_name, settings.maintenance_mode
        );
        Ok(settings)
    }
}

pub fn validate_settings(settings: &SystemSettings) -> Result<(), SettingsError> {
    if settings.max_login_attempts <= 0 {
        return Err(SettingsError::Invalid("maxLoginAttempts must be greater than 0".to_string()));
    }
    if settings.session_timeout <= 0 {
        return Err(SettingsError::Invalid("sessionTimeout must be greater than 0".to_string()));
    }

    for (field, value) in [
        ("siteName", &settings.site_name),
        ("defaultLanguage", &settings.default_language),
        ("timezone", &settings.timezone),
    ] {
        if value.trim().is_empty() {
            return Err(SettingsError::Invalid(format!("{} cannot be empty", field)));
        }
    }

    Ok(())
}
