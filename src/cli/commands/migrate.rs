use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;
use serde_json::json;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let database = &config::config().database;
    let pool = DatabaseManager::connect(database).await?;
    DatabaseManager::migrate(&pool).await?;
    DatabaseManager::close(pool).await;

    output_success(
        &output_format,
        &format!("Database '{}' is up to date", database.url),
        Some(json!({ "database": database.url })),
    )
}
