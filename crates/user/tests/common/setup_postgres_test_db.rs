// crates/user/tests/common/setup_postgres_test_db.rs

use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use user::domain::entities::UserInfo;
use user::domain::value_objects::{Email, PersonName, UserId};

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
}

pub fn sample_user(user_id: &str, first_name: &str, email: &str) -> UserInfo {
    UserInfo::builder(
        UserId::try_new(user_id).unwrap(),
        PersonName::try_new("first_name", first_name).unwrap(),
        PersonName::try_new("last_name", "Tester").unwrap(),
        Email::try_new(email).unwrap(),
    )
    .build()
}
