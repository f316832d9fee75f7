// crates/user/tests/repositories/user_repository_it.rs

use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransaction;
use user::domain::repositories::UserRepository;
use user::domain::entities::UserInfo;
use user::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};
use user::infrastructure::postgres::repositories::PostgresUserRepository;
use uuid::Uuid;

use crate::common::{sample_user, setup_postgres_test_db};

#[tokio::test]
async fn test_save_then_find() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresUserRepository::new(ctx.pool());
    let id = Uuid::new_v4().to_string();

    let user = sample_user(&id, "Linus", "linus@kernel.org");

    repo.save(&user, None).await.unwrap();

    let found = repo.find_by_user_id(user.user_id(), None).await.unwrap().expect("Should find user");
    assert_eq!(found.first_name().as_str(), "Linus");
    assert_eq!(found.email().as_str(), "linus@kernel.org");
    assert!(repo.exists_by_user_id(user.user_id()).await.unwrap());
}

#[tokio::test]
async fn test_unknown_user_is_absent() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresUserRepository::new(ctx.pool());
    let id = UserId::try_new("does-not-exist").unwrap();

    assert!(repo.find_by_user_id(&id, None).await.unwrap().is_none());
    assert!(!repo.exists_by_user_id(&id).await.unwrap());
}

#[tokio::test]
async fn test_upsert_keeps_single_row_and_created_at() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();
    let repo = PostgresUserRepository::new(pool.clone());
    let id = Uuid::new_v4().to_string();

    repo.save(&sample_user(&id, "Ada", "ada@example.com"), None).await.unwrap();
    let first = repo.find_by_user_id(&UserId::from_raw(&id), None).await.unwrap().unwrap();

    // Deuxième version : created_at "neuf" côté entité, mais ignoré par l'ON CONFLICT
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = sample_user(&id, "Augusta", "augusta@example.com");
    repo.save(&second, None).await.unwrap();

    let stored = repo.find_by_user_id(&UserId::from_raw(&id), None).await.unwrap().unwrap();
    assert_eq!(stored.first_name().as_str(), "Augusta");
    assert_eq!(stored.created_at(), first.created_at());
    assert!(stored.updated_at() > first.updated_at());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users_info WHERE user_id = $1")
        .bind(&id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_optional_fields_roundtrip_through_db() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresUserRepository::new(ctx.pool());
    let id = Uuid::new_v4().to_string();

    let user = UserInfo::builder(
        UserId::try_new(&id).unwrap(),
        PersonName::try_new("first_name", "Grace").unwrap(),
        PersonName::try_new("last_name", "Hopper").unwrap(),
        Email::try_new("grace@navy.mil").unwrap(),
    )
    .with_phone(Some(PhoneNumber::try_new("+1 202 555 0100").unwrap()))
    .build();

    repo.save(&user, None).await.unwrap();

    let found = repo.find_by_user_id(user.user_id(), None).await.unwrap().unwrap();
    assert_eq!(found.phone_number().map(|p| p.as_str()), Some("+12025550100"));
    assert!(found.profile_pic().is_none());
}

#[tokio::test]
async fn test_rollback_discards_upsert() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();
    let repo = PostgresUserRepository::new(pool.clone());
    let id = Uuid::new_v4().to_string();
    let user = sample_user(&id, "Ghost", "ghost@void.com");

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    {
        let tx_ref: &mut dyn Transaction = &mut tx;
        repo.save(&user, Some(tx_ref)).await.unwrap();
    }
    tx.into_inner().rollback().await.unwrap();

    assert!(!repo.exists_by_user_id(user.user_id()).await.unwrap());
}
