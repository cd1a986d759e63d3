// handlers/protected/brand/mod.rs - Brand lifecycle handlers
//
// Hard delete is refused while workspaces, bots or agents still reference
// the brand (unless the deployment opts into cascade). Soft delete is the
// non-destructive path and is reversible through restore.

pub mod create; // POST /api/v1/brands
pub mod delete; // DELETE /api/v1/brands/:id
pub mod dependents; // GET/POST /api/v1/brands/:id/{workspaces,bots,agents}
pub mod list; // GET /api/v1/brands
pub mod restore; // PUT /api/v1/brands/:id/restore
pub mod show; // GET /api/v1/brands/:id
pub mod soft_delete; // PUT /api/v1/brands/:id/soft-delete
pub mod token; // GET /api/v1/brands/:id/token
pub mod update; // PUT /api/v1/brands/:id

pub use create::brand_create;
pub use delete::brand_delete;
pub use dependents::{dependents_get, dependents_post};
pub use list::brand_list;
pub use restore::brand_restore;
pub use show::brand_show;
pub use soft_delete::brand_soft_delete;
pub use token::brand_token;
pub use update::brand_update;
