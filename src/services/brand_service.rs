use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DeletionPolicy;
use crate::database::models::{
    Brand, BrandPatch, BrandStatus, BrandToken, DependentCounts, DependentKind, DependentRecord, NewBrand,
    NewDependent,
};
use crate::database::{DatabaseError, Store};

#[derive(Debug, thiserror::Error)]
pub enum BrandError {
    #[error("Brand not found: {0}")]
    NotFound(String),
    #[error("Cannot delete brand with associated resources: {0}")]
    HasDependents(DependentCounts),
    #[error("Brand already deleted: {brand_id}")]
    AlreadyDeleted {
        brand_id: String,
        deleted_at: Option<DateTime<Utc>>,
    },
    #[error("Brand is not deleted: {0}")]
    NotDeleted(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid brand: {0}")]
    Invalid(String),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Result of a hard delete
#[derive(Debug, Clone, Serialize)]
pub struct BrandDeletionReceipt {
    pub brand_id: String,
    pub brand_name: String,
    /// Dependents removed first under the cascade policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cascaded: Option<DependentCounts>,
}

/// Result of a soft delete
#[derive(Debug, Clone, Serialize)]
pub struct SoftDeleteReceipt {
    pub brand_id: String,
    pub brand_name: String,
    pub deleted_at: DateTime<Utc>,
}

/// Brand lifecycle: CRUD, guarded hard delete, soft delete and restore
#[derive(Clone)]
pub struct BrandService {
    store: Arc<dyn Store>,
    deletion_policy: DeletionPolicy,
}

impl BrandService {
    pub fn new(store: Arc<dyn Store>, deletion_policy: DeletionPolicy) -> Self {
        Self { store, deletion_policy }
    }

    pub async fn list_brands(&self, include_deleted: bool) -> Result<Vec<Brand>, BrandError> {
        Ok(self.store.list_brands(include_deleted).await?)
    }

    pub async fn get_brand(&self, brand_id: &str) -> Result<Brand, BrandError> {
        self.store
            .get_brand(brand_id)
            .await?
            .ok_or_else(|| BrandError::NotFound(brand_id.to_string()))
    }

    pub async fn create_brand(&self, input: NewBrand) -> Result<Brand, BrandError> {
        let id = match input.id {
            Some(id) => {
                validate_brand_id(&id)?;
                id
            }
            None => Uuid::new_v4().to_string(),
        };
        validate_name(&input.name)?;
        validate_api_url(&input.api_url)?;
        validate_token(&input.api_token)?;

        let status = input.status.unwrap_or(BrandStatus::Active);
        if status == BrandStatus::Deleted {
            return Err(BrandError::Invalid("a brand cannot be created as deleted".to_string()));
        }

        if self.store.get_brand(&id).await?.is_some() {
            return Err(BrandError::AlreadyExists(format!("brand '{}'", id)));
        }

        let now = Utc::now();
        let brand = Brand {
            id,
            name: input.name.trim().to_string(),
            api_url: input.api_url.trim().to_string(),
            api_token: input.api_token,
            status,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };

        self.store.insert_brand(&brand).await.map_err(|e| match e {
            DatabaseError::Duplicate(what) => BrandError::AlreadyExists(what),
            other => other.into(),
        })?;

        info!("Created brand {} ({})", brand.id, brand.name);
        Ok(brand)
    }

    pub async fn update_brand(&self, brand_id: &str, patch: BrandPatch) -> Result<Brand, BrandError> {
        let mut brand = self.get_brand(brand_id).await?;
        if !brand.is_active() {
            return Err(BrandError::AlreadyDeleted {
                brand_id: brand.id,
                deleted_at: brand.deleted_at,
            });
        }

        if let Some(name) = patch.name {
            validate_name(&name)?;
            brand.name = name.trim().to_string();
        }
        if let Some(api_url) = patch.api_url {
            validate_api_url(&api_url)?;
            brand.api_url = api_url.trim().to_string();
        }
        if let Some(token) = patch.api_token {
            validate_token(&token)?;
            brand.api_token = token;
        }
        if let Some(status) = patch.status {
            if status == BrandStatus::Deleted {
                return Err(BrandError::Invalid("use soft delete to mark a brand deleted".to_string()));
            }
            brand.status = status;
        }
        brand.updated_at = Utc::now();

        if self.store.update_brand(&brand).await? == 0 {
            // Soft deleted or removed since it was read
            return Err(self.lost_race(brand_id).await?);
        }

        Ok(brand)
    }

    /// Permanently remove a brand.
    ///
    /// Under [`DeletionPolicy::Reject`] any workspace, bot or agent still
    /// attached to the brand blocks the delete. Under
    /// [`DeletionPolicy::Cascade`] they are removed first. A delete that finds
    /// no row (another request won the race) reports `NotFound`; a dependent
    /// attached after the count still blocks it with `HasDependents`.
    pub async fn delete_brand(&self, brand_id: &str) -> Result<BrandDeletionReceipt, BrandError> {
        let brand = self.get_brand(brand_id).await?;
        let counts = self.store.count_dependents(brand_id).await?;

        let cascaded = if counts.is_empty() {
            None
        } else {
            match self.deletion_policy {
                DeletionPolicy::Reject => {
                    warn!("Refusing to delete brand {}: {}", brand_id, counts);
                    return Err(BrandError::HasDependents(counts));
                }
                DeletionPolicy::Cascade => {
                    let removed = self.store.delete_dependents(brand_id).await?;
                    info!("Cascade removed {} for brand {}", removed, brand_id);
                    Some(removed)
                }
            }
        };

        let deleted = match self.store.delete_brand(brand_id).await {
            Ok(rows) => rows,
            Err(DatabaseError::StillReferenced(_)) => {
                let counts = self.store.count_dependents(brand_id).await?;
                warn!("Refusing to delete brand {}: {} attached during delete", brand_id, counts);
                return Err(BrandError::HasDependents(counts));
            }
            Err(e) => return Err(e.into()),
        };
        if deleted == 0 {
            return Err(BrandError::NotFound(brand_id.to_string()));
        }

        info!("Deleted brand {} ({})", brand.id, brand.name);
        Ok(BrandDeletionReceipt {
            brand_id: brand.id,
            brand_name: brand.name,
            cascaded,
        })
    }

    /// Tombstone a brand. The first call wins; later calls report `AlreadyDeleted`
    /// and leave the original `deleted_at` untouched.
    pub async fn soft_delete_brand(&self, brand_id: &str) -> Result<SoftDeleteReceipt, BrandError> {
        let brand = self.get_brand(brand_id).await?;
        if !brand.is_active() {
            return Err(BrandError::AlreadyDeleted {
                brand_id: brand.id,
                deleted_at: brand.deleted_at,
            });
        }

        let deleted_at = Utc::now();
        if self.store.set_brand_deleted_at(brand_id, deleted_at).await? == 0 {
            // Lost a race against another delete
            return Err(self.lost_race(brand_id).await?);
        }

        info!("Soft deleted brand {} ({})", brand.id, brand.name);
        Ok(SoftDeleteReceipt {
            brand_id: brand.id,
            brand_name: brand.name,
            deleted_at,
        })
    }

    /// Error for a write that matched no live row: the brand was soft deleted
    /// by someone else (`AlreadyDeleted` with their timestamp) or is gone.
    async fn lost_race(&self, brand_id: &str) -> Result<BrandError, BrandError> {
        Ok(match self.store.get_brand(brand_id).await? {
            Some(current) => BrandError::AlreadyDeleted {
                brand_id: current.id,
                deleted_at: current.deleted_at,
            },
            None => BrandError::NotFound(brand_id.to_string()),
        })
    }

    pub async fn restore_brand(&self, brand_id: &str) -> Result<Brand, BrandError> {
        let brand = self.get_brand(brand_id).await?;
        if brand.is_active() {
            return Err(BrandError::NotDeleted(brand_id.to_string()));
        }

        if self.store.clear_brand_deleted_at(brand_id, Utc::now()).await? == 0 {
            return Err(BrandError::NotDeleted(brand_id.to_string()));
        }

        info!("Restored brand {} ({})", brand.id, brand.name);
        self.get_brand(brand_id).await
    }

    pub async fn get_brand_token(&self, brand_id: &str) -> Result<BrandToken, BrandError> {
        self.store
            .get_brand_token(brand_id)
            .await?
            .ok_or_else(|| BrandError::NotFound(brand_id.to_string()))
    }

    pub async fn list_dependents(&self, brand_id: &str, kind: DependentKind) -> Result<Vec<DependentRecord>, BrandError> {
        self.get_brand(brand_id).await?;
        Ok(self.store.list_dependents(brand_id, kind).await?)
    }

    pub async fn attach_dependent(
        &self,
        brand_id: &str,
        kind: DependentKind,
        input: NewDependent,
    ) -> Result<DependentRecord, BrandError> {
        let brand = self.get_brand(brand_id).await?;
        if !brand.is_active() {
            return Err(BrandError::AlreadyDeleted {
                brand_id: brand.id,
                deleted_at: brand.deleted_at,
            });
        }

        let id = match input.id {
            Some(id) => {
                validate_brand_id(&id)?;
                id
            }
            None => Uuid::new_v4().to_string(),
        };
        validate_name(&input.name)?;

        let record = DependentRecord {
            id,
            brand_id: brand.id,
            name: input.name.trim().to_string(),
            created_at: Utc::now(),
        };

        self.store.insert_dependent(kind, &record).await.map_err(|e| match e {
            DatabaseError::Duplicate(what) => BrandError::AlreadyExists(what),
            other => other.into(),
        })?;

        Ok(record)
    }
}

/// Identifiers are 1-64 characters of letters, digits, `_` and `-`
pub fn validate_brand_id(id: &str) -> Result<(), BrandError> {
    if id.is_empty() || id.len() > 64 {
        return Err(BrandError::Invalid("id must be 1 to 64 characters".to_string()));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(BrandError::Invalid(
            "id can only contain letters, numbers, hyphens, and underscores".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), BrandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BrandError::Invalid("name cannot be empty".to_string()));
    }
    if name.chars().count() > 100 {
        return Err(BrandError::Invalid("name must be at most 100 characters".to_string()));
    }
    Ok(())
}

fn validate_api_url(api_url: &str) -> Result<(), BrandError> {
    let url = url::Url::parse(api_url.trim())
        .map_err(|e| BrandError::Invalid(format!("api_url is not a valid URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BrandError::Invalid(format!("api_url scheme '{}' is not http(s)", other))),
    }
}

fn validate_token(token: &str) -> Result<(), BrandError> {
    if token.trim().is_empty() {
        return Err(BrandError::Invalid("api_token cannot be empty".to_string()));
    }
    Ok(())
}
