use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePool, FromRow};

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{
    Brand, BrandToken, DependentCounts, DependentKind, DependentRecord, ResourceTotals, SystemSettings,
};
use crate::database::store::Store;

const BRAND_COLUMNS: &str = "id, name, api_url, api_token, status, deleted_at, created_at, updated_at";

const SETTINGS_COLUMNS: &str = "site_name, default_language, timezone, debug_mode, \
     max_login_attempts, session_timeout, email_notifications, maintenance_mode";

/// `Store` backed by a SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct BrandRow {
    id: String,
    name: String,
    api_url: String,
    api_token: String,
    status: String,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BrandRow> for Brand {
    type Error = DatabaseError;

    fn try_from(row: BrandRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(DatabaseError::QueryError)?;
        Ok(Brand {
            id: row.id,
            name: row.name,
            api_url: row.api_url,
            api_token: row.api_token,
            status,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fresh migrated in-memory store
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(DatabaseManager::in_memory().await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_unique_violation(err: sqlx::Error, what: String) -> DatabaseError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return DatabaseError::Duplicate(what);
        }
    }
    DatabaseError::Sqlx(err)
}

fn map_foreign_key_violation(err: sqlx::Error, what: String) -> DatabaseError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return DatabaseError::StillReferenced(what);
        }
    }
    DatabaseError::Sqlx(err)
}

#[async_trait]
impl Store for SqliteStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }

    async fn list_brands(&self, include_deleted: bool) -> Result<Vec<Brand>, DatabaseError> {
        let sql = if include_deleted {
            format!("SELECT {} FROM brands ORDER BY created_at DESC, id", BRAND_COLUMNS)
        } else {
            format!(
                "SELECT {} FROM brands WHERE deleted_at IS NULL AND status != 'deleted' ORDER BY created_at DESC, id",
                BRAND_COLUMNS
            )
        };

        let rows = sqlx::query_as::<_, BrandRow>(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(Brand::try_from).collect()
    }

    async fn get_brand(&self, id: &str) -> Result<Option<Brand>, DatabaseError> {
        let sql = format!("SELECT {} FROM brands WHERE id = ?", BRAND_COLUMNS);
        let row = sqlx::query_as::<_, BrandRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Brand::try_from).transpose()
    }

    async fn insert_brand(&self, brand: &Brand) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO brands (id, name, api_url, api_token, status, deleted_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&brand.id)
        .bind(&brand.name)
        .bind(&brand.api_url)
        .bind(&brand.api_token)
        .bind(brand.status.as_str())
        .bind(brand.deleted_at)
        .bind(brand.created_at)
        .bind(brand.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, format!("brand '{}'", brand.id)))?;

        Ok(())
    }

    async fn update_brand(&self, brand: &Brand) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE brands SET name = ?, api_url = ?, api_token = ?, status = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&brand.name)
        .bind(&brand.api_url)
        .bind(&brand.api_token)
        .bind(brand.status.as_str())
        .bind(brand.updated_at)
        .bind(&brand.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_brand(&self, id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, format!("brand '{}'", id)))?;

        Ok(result.rows_affected())
    }

    async fn set_brand_deleted_at(&self, id: &str, deleted_at: DateTime<Utc>) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE brands SET deleted_at = ?, status = 'deleted', updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(deleted_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn clear_brand_deleted_at(&self, id: &str, restored_at: DateTime<Utc>) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE brands SET deleted_at = NULL, status = 'active', updated_at = ? WHERE id = ? AND deleted_at IS NOT NULL",
        )
        .bind(restored_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn get_brand_token(&self, id: &str) -> Result<Option<BrandToken>, DatabaseError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT api_token, api_url FROM brands WHERE id = ? AND deleted_at IS NULL")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(token, api_url)| BrandToken {
            token,
            api_url,
            expires_at: None,
        }))
    }

    async fn count_dependents(&self, brand_id: &str) -> Result<DependentCounts, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let mut counts = DependentCounts::default();

        for kind in DependentKind::ALL {
            let sql = format!("SELECT COUNT(*) FROM {} WHERE brand_id = ?", kind.table());
            let count: i64 = sqlx::query_scalar(&sql)
                .bind(brand_id)
                .fetch_one(&mut *conn)
                .await?;

            match kind {
                DependentKind::Workspace => counts.workspaces = count,
                DependentKind::Bot => counts.bots = count,
                DependentKind::Agent => counts.agents = count,
            }
        }

        Ok(counts)
    }

    async fn delete_dependents(&self, brand_id: &str) -> Result<DependentCounts, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let mut removed = DependentCounts::default();

        for kind in DependentKind::ALL {
            let sql = format!("DELETE FROM {} WHERE brand_id = ?", kind.table());
            let rows = sqlx::query(&sql)
                .bind(brand_id)
                .execute(&mut *tx)
                .await?
                .rows_affected() as i64;

            match kind {
                DependentKind::Workspace => removed.workspaces = rows,
                DependentKind::Bot => removed.bots = rows,
                DependentKind::Agent => removed.agents = rows,
            }
        }

        tx.commit().await?;
        Ok(removed)
    }

    async fn list_dependents(&self, brand_id: &str, kind: DependentKind) -> Result<Vec<DependentRecord>, DatabaseError> {
        let sql = format!(
            "SELECT id, brand_id, name, created_at FROM {} WHERE brand_id = ? ORDER BY created_at, id",
            kind.table()
        );
        let rows = sqlx::query_as::<_, DependentRecord>(&sql)
            .bind(brand_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn insert_dependent(&self, kind: DependentKind, record: &DependentRecord) -> Result<(), DatabaseError> {
        let sql = format!(
            "INSERT INTO {} (id, brand_id, name, created_at) VALUES (?, ?, ?, ?)",
            kind.table()
        );
        sqlx::query(&sql)
            .bind(&record.id)
            .bind(&record.brand_id)
            .bind(&record.name)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, format!("{} '{}'", kind.plural(), record.id)))?;

        Ok(())
    }

    async fn resource_totals(&self) -> Result<ResourceTotals, DatabaseError> {
        let (brand_count, workspace_count, bot_count, agent_count): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM brands WHERE deleted_at IS NULL AND status != 'deleted'),
                (SELECT COUNT(*) FROM brand_workspaces),
                (SELECT COUNT(*) FROM brand_bots),
                (SELECT COUNT(*) FROM brand_agents)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(ResourceTotals {
            brand_count,
            workspace_count,
            bot_count,
            agent_count,
        })
    }

    async fn get_settings(&self) -> Result<Option<SystemSettings>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM system_settings ORDER BY id DESC LIMIT 1",
            SETTINGS_COLUMNS
        );
        let row = sqlx::query_as::<_, SystemSettings>(&sql)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn upsert_settings(&self, settings: &SystemSettings) -> Result<(), DatabaseError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE system_settings SET
                site_name = ?,
                default_language = ?,
                timezone = ?,
                debug_mode = ?,
                max_login_attempts = ?,
                session_timeout = ?,
                email_notifications = ?,
                maintenance_mode = ?,
                updated_at = ?
            WHERE id = (SELECT MAX(id) FROM system_settings)
            "#,
        )
        .bind(&settings.site_name)
        .bind(&settings.default_language)
        .bind(&settings.timezone)
        .bind(settings.debug_mode)
        .bind(settings.max_login_attempts)
        .bind(settings.session_timeout)
        .bind(settings.email_notifications)
        .bind(settings.maintenance_mode)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            let sql = format!(
                "INSERT INTO system_settings ({}, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                SETTINGS_COLUMNS
            );
            sqlx::query(&sql)
                .bind(&settings.site_name)
                .bind(&settings.default_language)
                .bind(&settings.timezone)
                .bind(settings.debug_mode)
                .bind(settings.max_login_attempts)
                .bind(settings.session_timeout)
                .bind(settings.email_notifications)
                .bind(settings.maintenance_mode)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
