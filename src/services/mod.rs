pub mod agent_status;
pub mod brand_service;
pub mod dashboard_service;
pub mod settings_service;

pub use agent_status::{AgentStatusAggregator, AgentStatuses, FallbackStatusSource, RemoteStatusSource, StatusSource};
pub use brand_service::{BrandError, BrandService};
pub use dashboard_service::DashboardService;
pub use settings_service::{SettingsError, SettingsService};
