// handlers/protected/system/mod.rs - Deployment-wide settings

pub mod settings; // GET/PUT /api/v1/system/settings

pub use settings::{settings_get, settings_put};
