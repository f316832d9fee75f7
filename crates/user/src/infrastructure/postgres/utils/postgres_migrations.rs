// crates/user/src/infrastructure/postgres/utils/postgres_migrations.rs

use sqlx::PgPool;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

/// Migrations embarquées dans le binaire à la compilation
pub async fn run_postgres_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, format!("Migration failed: {}", e)))?;

    tracing::info!("✅ users_info schema is up to date");
    Ok(())
}
