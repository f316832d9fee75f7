// crates/user/src/infrastructure/postgres/repositories/postgres_user_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as, query_scalar};

use crate::domain::entities::UserInfo;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;
use crate::infrastructure::postgres::rows::PostgresUserInfoRow;

pub struct PostgresUserRepository {
    pool: Pool<Postgres>,
}

impl PostgresUserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserInfo>> {
        let uid = user_id.as_str().to_string();
        let has_tx = tx.is_some();

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                // Verrou de ligne uniquement dans une transaction
                let sql = if has_tx {
                    "SELECT * FROM users_info WHERE user_id = $1 FOR UPDATE"
                } else {
                    "SELECT * FROM users_info WHERE user_id = $1"
                };

                query_as::<_, PostgresUserInfoRow>(sql)
                    .bind(uid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<UserInfo>()
            })
        })
        .await?;

        row.map(UserInfo::try_from).transpose()
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool> {
        let uid = user_id.as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_scalar::<Postgres, bool>(
                    "SELECT EXISTS(SELECT 1 FROM users_info WHERE user_id = $1)",
                )
                .bind(uid)
                .fetch_one(conn)
                .await
                .map_domain::<UserInfo>()
            })
        })
        .await
    }

    async fn save(&self, user: &UserInfo, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let row = PostgresUserInfoRow::from(user);

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                // created_at n'est jamais écrasé par la branche UPDATE
                query(
                    r#"
                    INSERT INTO users_info (
                        user_id, first_name, last_name, email,
                        phone_number, profile_pic, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    ON CONFLICT (user_id) DO UPDATE SET
                        first_name = EXCLUDED.first_name,
                        last_name = EXCLUDED.last_name,
                        email = EXCLUDED.email,
                        phone_number = EXCLUDED.phone_number,
                        profile_pic = EXCLUDED.profile_pic,
                        updated_at = EXCLUDED.updated_at
                    "#,
                )
                .bind(row.user_id)
                .bind(row.first_name)
                .bind(row.last_name)
                .bind(row.email)
                .bind(row.phone_number)
                .bind(row.profile_pic)
                .bind(row.created_at)
                .bind(row.updated_at)
                .execute(conn)
                .await
                .map_domain::<UserInfo>()?;

                Ok(())
            })
        })
        .await
    }
}
