use std::sync::Arc;

use crate::auth::{CredentialVerifier, JwtCredentials};
use crate::config::{AppConfig, SecurityConfig};
use crate::database::Store;
use crate::services::{
    AgentStatusAggregator, BrandService, DashboardService, RemoteStatusSource, SettingsService, StatusSource,
};

/// Bootstrap administrator accepted by sign-in
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_config(security: &SecurityConfig) -> Option<Self> {
        match (&security.admin_username, &security.admin_password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => Some(Self {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Everything a handler may touch. Cheap to clone; the store pool is the only
/// shared mutable resource behind it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub brands: BrandService,
    pub settings: SettingsService,
    pub agent_status: Arc<AgentStatusAggregator>,
    pub dashboard: DashboardService,
    pub tokens: JwtCredentials,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub admin: Option<AdminCredentials>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: &AppConfig) -> Self {
        let timeout = config.status_source.timeout();
        let remote: Arc<dyn StatusSource> = Arc::new(RemoteStatusSource::new(
            store.clone(),
            config.status_source.path.clone(),
            timeout,
        ));
        Self::with_status_source(store, config, remote)
    }

    /// Same as [`AppState::new`] with the primary agent status source swapped out
    pub fn with_status_source(store: Arc<dyn Store>, config: &AppConfig, primary: Arc<dyn StatusSource>) -> Self {
        let agent_status = Arc::new(AgentStatusAggregator::new(primary, config.status_source.timeout()));
        let tokens = JwtCredentials::from_config(&config.security);

        Self {
            brands: BrandService::new(store.clone(), config.brands.deletion_policy),
            settings: SettingsService::new(store.clone()),
            dashboard: DashboardService::new(store.clone(), agent_status.clone()),
            agent_status,
            verifier: Arc::new(tokens.clone()),
            tokens,
            admin: AdminCredentials::from_config(&config.security),
            store,
        }
    }
}
