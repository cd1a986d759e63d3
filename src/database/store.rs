use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::database::manager::DatabaseError;
use crate::database::models::{
    Brand, BrandToken, DependentCounts, DependentKind, DependentRecord, ResourceTotals, SystemSettings,
};

/// Narrow persistence contract the request handlers work against.
///
/// Every call borrows a pooled connection for its own duration only; nothing
/// is held across calls, so a failed call never leaks a connection.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    // Brands

    /// Brands ordered newest first. Soft-deleted brands only when `include_deleted`.
    async fn list_brands(&self, include_deleted: bool) -> Result<Vec<Brand>, DatabaseError>;

    async fn get_brand(&self, id: &str) -> Result<Option<Brand>, DatabaseError>;

    /// Fails with `DatabaseError::Duplicate` when the id is taken.
    async fn insert_brand(&self, brand: &Brand) -> Result<(), DatabaseError>;

    /// Writes name, api_url, api_token, status and updated_at of a live brand.
    /// A soft-deleted row is left untouched and counts as zero rows affected.
    async fn update_brand(&self, brand: &Brand) -> Result<u64, DatabaseError>;

    /// Fails with `DatabaseError::StillReferenced` while dependents point at the row.
    async fn delete_brand(&self, id: &str) -> Result<u64, DatabaseError>;

    /// Tombstones a live brand: sets `deleted_at` and status `deleted`.
    /// Already-deleted rows are left untouched and count as zero rows affected.
    async fn set_brand_deleted_at(&self, id: &str, deleted_at: DateTime<Utc>) -> Result<u64, DatabaseError>;

    /// Clears the tombstone of a soft-deleted brand and marks it active again.
    async fn clear_brand_deleted_at(&self, id: &str, restored_at: DateTime<Utc>) -> Result<u64, DatabaseError>;

    async fn get_brand_token(&self, id: &str) -> Result<Option<BrandToken>, DatabaseError>;

    // Dependents

    async fn count_dependents(&self, brand_id: &str) -> Result<DependentCounts, DatabaseError>;

    /// Removes every workspace, bot and agent of the brand in one transaction,
    /// returning how many of each were removed.
    async fn delete_dependents(&self, brand_id: &str) -> Result<DependentCounts, DatabaseError>;

    async fn list_dependents(&self, brand_id: &str, kind: DependentKind) -> Result<Vec<DependentRecord>, DatabaseError>;

    async fn insert_dependent(&self, kind: DependentKind, record: &DependentRecord) -> Result<(), DatabaseError>;

    async fn resource_totals(&self) -> Result<ResourceTotals, DatabaseError>;

    // System settings

    /// The current settings row (greatest id), if any row exists.
    async fn get_settings(&self) -> Result<Option<SystemSettings>, DatabaseError>;

    /// Updates the current row, inserting one when the table is empty.
    async fn upsert_settings(&self, settings: &SystemSettings) -> Result<(), DatabaseError>;
}
