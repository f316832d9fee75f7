// crates/user/tests/common/mod.rs

mod setup_postgres_test_db;

pub use setup_postgres_test_db::{sample_user, setup_postgres_test_db};
