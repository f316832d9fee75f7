// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::PostgresContextBuilder;

pub struct PostgresContext {
    pool: PgPool,
}

impl PostgresContext {
    pub fn builder() -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::new()
    }

    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.max_connections)
            .min_connections(builder.min_connections)
            .acquire_timeout(builder.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, format!("Postgres Connection Failed: {}", e)))?;

        tracing::info!(
            "🐘 Postgres pool ready (min: {}, max: {})",
            builder.min_connections,
            builder.max_connections
        );

        Ok(Self { pool })
    }
}
