// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition endpoints that do not require authentication.

pub mod sign_in; // POST /api/v1/auth/sign-in - authenticate and get JWT

pub use sign_in::sign_in_post;
