// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use std::path::Path;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::{run_postgres_migrations_from, PostgresTestContextBuilder};

/// Postgres éphémère (testcontainers) + pool prête à l'emploi.
/// Le container vit aussi longtemps que le contexte.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub(crate) async fn restore(builder: PostgresTestContextBuilder) -> Self {
        // 1. Démarrage container
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Postgres port not exposed");
        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        // 2. Pool
        let context = PostgresContext::builder_raw()
            .with_url(&conn_str)
            .build()
            .await
            .expect("Failed to build context");

        // 3. Migrations (chemins relatifs au crate testé)
        for path in &builder.migrations {
            if !Path::new(path).exists() {
                panic!("Migration path not found: {}", path);
            }
            run_postgres_migrations_from(&context.pool(), path)
                .await
                .expect("Failed to apply migrations");
        }

        Self { context, _container: container }
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }
}
