// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: JWT Authentication Required
// Route Prefix: /api/v1/*
// Middleware: jwt_auth_middleware injects AuthUser

pub mod agent_status; // Live agent presence with fallback
pub mod auth; // Current session
pub mod brand; // Brand lifecycle
pub mod dashboard; // Aggregated counters
pub mod system; // Deployment settings
