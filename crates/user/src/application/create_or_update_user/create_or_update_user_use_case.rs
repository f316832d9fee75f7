// crates/user/src/application/create_or_update_user/create_or_update_user_use_case.rs

use std::sync::{Arc, OnceLock};
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{internal_err, Result};
use shared_kernel::infrastructure::{with_retry, RetryConfig};

use crate::application::create_or_update_user::CreateOrUpdateUserCommand;
use crate::domain::repositories::UserRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

pub struct CreateOrUpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    retry_config: RetryConfig,
}

impl CreateOrUpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, tx_manager: Arc<dyn TransactionManager>) -> Self {
        Self {
            user_repo,
            tx_manager,
            retry_config: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub async fn execute(&self, command: CreateOrUpdateUserCommand) -> Result<UpsertOutcome> {
        let cmd = &command;

        let outcome = with_retry(self.retry_config, move || async move {
            self.try_execute_once(cmd).await
        }).await?;

        tracing::info!(
            user_id = %command.user_id,
            email_hash = command.email.hash_value(),
            "✅ User info {}",
            match outcome {
                UpsertOutcome::Created => "created",
                UpsertOutcome::Updated => "updated",
            }
        );

        Ok(outcome)
    }

    async fn try_execute_once(&self, cmd: &CreateOrUpdateUserCommand) -> Result<UpsertOutcome> {
        let incoming = cmd.to_user_info();
        let repo = Arc::clone(&self.user_repo);

        // Le résultat est produit dans la transaction, lu après le commit
        let outcome = Arc::new(OnceLock::new());
        let slot = Arc::clone(&outcome);

        self.tx_manager.run_in_transaction(move |tx| Box::pin(async move {
            // 1. LECTURE DANS LA TRANSACTION
            let existing = repo.find_by_user_id(incoming.user_id(), Some(&mut *tx)).await?;

            // 2. FUSION OU CRÉATION
            let (user, result) = match existing {
                Some(mut current) => {
                    if !current.refresh_from(incoming) {
                        tracing::debug!(user_id = %current.user_id(), "🔁 Replayed event, only updated_at moves");
                    }
                    (current, UpsertOutcome::Updated)
                }
                None => (incoming, UpsertOutcome::Created),
            };

            // 3. UPSERT
            repo.save(&user, Some(&mut *tx)).await?;

            let _ = slot.set(result);
            Ok(())
        })).await?;

        outcome
            .get()
            .copied()
            .ok_or_else(|| internal_err("Transaction committed without an upsert outcome"))
    }
}
