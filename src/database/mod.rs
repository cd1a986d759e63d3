pub mod manager;
pub mod models;
pub mod sqlite_store;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use sqlite_store::SqliteStore;
pub use store::Store;
