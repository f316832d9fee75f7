// crates/shared-kernel/src/application/ports/message_consumer.rs

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use crate::errors::AppResult;

/// Message brut tel que reçu du broker, détaché du client (owned).
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl IncomingMessage {
    /// Constructeur minimal, pratique pour les tests
    pub fn from_payload(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            partition: 0,
            offset: 0,
            key: None,
            payload: payload.into(),
        }
    }
}

pub type MessageHandler = Box<dyn Fn(IncomingMessage) -> BoxFuture<'static, AppResult<()>> + Send + Sync>;

#[async_trait]
pub trait MessageConsumer: Send + Sync {
    /// Boucle de consommation : ne rend la main qu'à l'arrêt du consumer.
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()>;
}
