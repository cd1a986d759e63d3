// handlers/protected/dashboard/mod.rs - Dashboard handlers

pub mod agent_monitor; // GET /api/v1/dashboard/agent-monitor
pub mod stats; // GET /api/v1/dashboard/stats

pub use agent_monitor::agent_monitor_get;
pub use stats::stats_get;
