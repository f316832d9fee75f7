// crates/user/src/infrastructure/kafka/user_info_consumer.rs

use std::sync::Arc;
use futures_util::FutureExt;
use shared_kernel::application::FromDto;
use shared_kernel::application::ports::{IncomingMessage, MessageHandler};
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

use crate::application::create_or_update_user::{
    CreateOrUpdateUserCommand, CreateOrUpdateUserUseCase, UpsertOutcome,
};
use crate::infrastructure::kafka::UserInfoEvent;

/// Listener du topic user-info : JSON -> commande -> upsert.
pub struct UserInfoConsumer {
    use_case: Arc<CreateOrUpdateUserUseCase>,
}

impl UserInfoConsumer {
    pub fn new(use_case: Arc<CreateOrUpdateUserUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn on_message_received(&self, payload: &[u8]) -> AppResult<UpsertOutcome> {
        let event: UserInfoEvent = serde_json::from_slice(payload).map_err(|e| {
            AppError::new(ErrorCode::ValidationFailed, format!("Invalid UserInfo payload: {}", e))
        })?;

        let command = CreateOrUpdateUserCommand::from_dto(event)?;

        Ok(self.use_case.execute(command).await?)
    }

    /// Toute erreur est journalisée ici et jamais propagée :
    /// l'offset est commité, le message suivant est traité.
    pub async fn listen(&self, payload: &[u8]) {
        match self.on_message_received(payload).await {
            Ok(outcome) => tracing::debug!(?outcome, "User info message processed"),
            Err(err) => tracing::error!(
                code = ?err.code,
                details = ?err.details,
                "❌ Failed to process user info message: {}",
                err.message
            ),
        }
    }

    pub fn handler(self: Arc<Self>) -> MessageHandler {
        Box::new(move |message: IncomingMessage| {
            let consumer = Arc::clone(&self);
            async move {
                consumer.listen(&message.payload).await;
                Ok(())
            }
            .boxed()
        })
    }
}
