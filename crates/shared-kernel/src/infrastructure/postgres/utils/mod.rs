// crates/shared-kernel/src/infrastructure/postgres/utils/mod.rs

mod postgres_migrations;
pub use postgres_migrations::run_postgres_migrations_from;

#[cfg(feature = "test-utils")]
mod postgres_test_context;
#[cfg(feature = "test-utils")]
mod postgres_test_context_builder;

#[cfg(feature = "test-utils")]
pub use postgres_test_context::PostgresTestContext;
#[cfg(feature = "test-utils")]
pub use postgres_test_context_builder::PostgresTestContextBuilder;
