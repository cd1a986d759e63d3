// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition and liveness probes.
//
// Security Level: None
// Middleware: None

pub mod auth;
pub mod health;

pub use health::health;
