// crates/user/src/infrastructure/kafka/raw_message_consumer.rs

use std::sync::Arc;
use futures_util::FutureExt;
use shared_kernel::application::ports::{IncomingMessage, MessageHandler};

/// Tap de diagnostic : journalise le payload brut, sans aucun traitement.
#[derive(Debug, Default)]
pub struct RawMessageConsumer;

impl RawMessageConsumer {
    pub fn new() -> Self {
        Self
    }

    pub fn consume(&self, payload: &[u8]) {
        tracing::info!("📨 Raw message received: {}", String::from_utf8_lossy(payload));
    }

    pub fn handler(self: Arc<Self>) -> MessageHandler {
        Box::new(move |message: IncomingMessage| {
            let consumer = Arc::clone(&self);
            async move {
                consumer.consume(&message.payload);
                Ok(())
            }
            .boxed()
        })
    }
}
