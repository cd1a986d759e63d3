// handlers/mod.rs - 2-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT auth under /api/v1)
pub mod public; // Tier 1: No authentication required (/health, /api/v1/auth/sign-in)
pub mod protected; // Tier 2: JWT authentication required (/api/v1/*)
