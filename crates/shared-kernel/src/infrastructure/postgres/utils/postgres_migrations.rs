// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use std::path::Path;
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Applique les migrations SQLx d'un répertoire (résolu à l'exécution).
pub async fn run_postgres_migrations_from(pool: &PgPool, dir: impl AsRef<Path>) -> AppResult<()> {
    let dir = dir.as_ref();

    let migrator = Migrator::new(dir).await.map_err(|e| {
        AppError::new(ErrorCode::ConfigurationError, format!("Invalid migration path {}: {}", dir.display(), e))
    })?;

    migrator.run(pool).await.map_err(|e| {
        AppError::new(ErrorCode::InfrastructureFailure, format!("Migration failed: {}", e))
    })?;

    tracing::info!("✅ Migrations applied from {}", dir.display());
    Ok(())
}
