// crates/user/src/domain/repositories/user_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::UserInfo;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;

#[derive(Default)]
pub struct UserRepositoryStub {
    /// Stockage en mémoire : UserId -> UserInfo
    pub users: Arc<Mutex<HashMap<UserId, UserInfo>>>,
    /// Historique des appels à `save`, dans l'ordre
    pub saved: Arc<Mutex<Vec<UserInfo>>>,
    /// Erreur renvoyée par toutes les méthodes tant qu'elle est positionnée
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Erreurs consommées une à une par `save` (ex: conflits transitoires)
    pub save_errors: Arc<Mutex<Vec<DomainError>>>,
}

impl UserRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: UserInfo) {
        self.users.lock().unwrap().insert(user.user_id().clone(), user);
    }

    pub fn get(&self, user_id: &str) -> Option<UserInfo> {
        self.users.lock().unwrap().get(&UserId::from_raw(user_id)).cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn fail_with(&self, err: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(err);
    }

    pub fn fail_next_saves_with(&self, errors: Vec<DomainError>) {
        *self.save_errors.lock().unwrap() = errors;
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryStub {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserInfo>> {
        self.check_error()?;
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> Result<bool> {
        self.check_error()?;
        Ok(self.users.lock().unwrap().contains_key(user_id))
    }

    async fn save(&self, user: &UserInfo, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.check_error()?;

        {
            let mut pending = self.save_errors.lock().unwrap();
            if !pending.is_empty() {
                return Err(pending.remove(0));
            }
        }

        let mut users = self.users.lock().unwrap();
        // Même sémantique que l'ON CONFLICT : created_at d'origine conservé
        let stored = match users.get(user.user_id()) {
            Some(existing) => {
                let mut merged = user.clone();
                merged.created_at = existing.created_at;
                merged
            }
            None => user.clone(),
        };

        users.insert(user.user_id().clone(), stored);
        self.saved.lock().unwrap().push(user.clone());
        Ok(())
    }
}
