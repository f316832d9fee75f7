// crates/user/src/domain/repositories/user_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::UserInfo;
use crate::domain::value_objects::UserId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserInfo>>;

    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool>;

    /// Upsert sur `user_id`. `created_at` n'est jamais écrasé par une mise à jour.
    async fn save(&self, user: &UserInfo, tx: Option<&mut dyn Transaction>) -> Result<()>;
}
