// crates/user/tests/use_cases/user_info_consumer_it.rs

use std::sync::Arc;
use shared_kernel::errors::ErrorCode;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;
use user::application::create_or_update_user::{CreateOrUpdateUserUseCase, UpsertOutcome};
use user::domain::repositories::UserRepository;
use user::domain::value_objects::UserId;
use user::infrastructure::kafka::UserInfoConsumer;
use user::infrastructure::postgres::repositories::PostgresUserRepository;

use crate::common::setup_postgres_test_db;

fn payload(user_id: &str, first_name: &str) -> Vec<u8> {
    format!(
        r#"{{"userId":"{user_id}","firstName":"{first_name}","lastName":"Doe","email":"{user_id}@example.com","phoneNumber":33612345678}}"#
    )
    .into_bytes()
}

#[tokio::test]
async fn test_event_replay_is_idempotent() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();
    let repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let use_case = CreateOrUpdateUserUseCase::new(repo.clone(), Arc::new(PostgresTransactionManager::new(pool.clone())));
    let consumer = UserInfoConsumer::new(Arc::new(use_case));

    let first = consumer.on_message_received(&payload("u-100", "John")).await.unwrap();
    let second = consumer.on_message_received(&payload("u-100", "Johnny")).await.unwrap();

    assert_eq!(first, UpsertOutcome::Created);
    assert_eq!(second, UpsertOutcome::Updated);

    let stored = repo.find_by_user_id(&UserId::from_raw("u-100"), None).await.unwrap().unwrap();
    assert_eq!(stored.first_name().as_str(), "Johnny");
    assert_eq!(stored.phone_number().map(|p| p.as_str()), Some("33612345678"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users_info")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_invalid_event_leaves_store_untouched() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();
    let repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let use_case = CreateOrUpdateUserUseCase::new(repo.clone(), Arc::new(PostgresTransactionManager::new(pool.clone())));
    let consumer = UserInfoConsumer::new(Arc::new(use_case));

    let bad = br#"{"user_id":"u-200","first_name":"A","last_name":"B","email":"not-an-email"}"#;
    let err = consumer.on_message_received(bad).await.unwrap_err();
    consumer.listen(bad).await;

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(!repo.exists_by_user_id(&UserId::from_raw("u-200")).await.unwrap());
}
