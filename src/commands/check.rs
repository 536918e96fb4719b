//! Check command - Verifies the database is reachable.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the check command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Failed to connect to database: {}", e)))?;

    db.ping()
        .await
        .map_err(|e| AppError::internal(format!("Database ping failed: {}", e)))?;

    tracing::info!("Database is reachable");
    Ok(())
}
