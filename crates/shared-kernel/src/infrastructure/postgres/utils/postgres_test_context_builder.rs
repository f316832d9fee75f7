// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context_builder.rs

use crate::infrastructure::postgres::utils::PostgresTestContext;

pub struct PostgresTestContextBuilder {
    pub(crate) image_name: String,
    pub(crate) image_tag: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) db_name: String,
    pub(crate) migrations: Vec<String>,
}

impl Default for PostgresTestContextBuilder {
    fn default() -> Self {
        Self {
            image_name: "postgres".to_string(),
            image_tag: "16-alpine".to_string(),
            user: "test".to_string(),
            password: "test".to_string(),
            db_name: "test_db".to_string(),
            migrations: Vec::new(),
        }
    }
}

impl PostgresTestContextBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn with_migrations(mut self, paths: &[&str]) -> Self {
        self.migrations = paths.iter().map(|s| s.to_string()).collect();
        self
    }

    pub async fn build(self) -> PostgresTestContext {
        PostgresTestContext::restore(self).await
    }
}
