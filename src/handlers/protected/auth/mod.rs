// handlers/protected/auth/mod.rs - Authenticated session handlers

pub mod me; // GET /api/v1/auth/me

pub use me::me_get;
