// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use crate::application::ports::{IncomingMessage, MessageConsumer, MessageHandler};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::kafka::KafkaConsumerConfig;
use async_trait::async_trait;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::{BorrowedMessage, Message};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

pub struct KafkaMessageConsumer {
    config: KafkaConsumerConfig,
    shutdown_token: CancellationToken,
    // Limite le nombre de messages traités en parallèle (1 = ordre préservé)
    concurrency_limit: Arc<Semaphore>,
    permits: u32,
}

impl KafkaMessageConsumer {
    pub fn new(config: KafkaConsumerConfig) -> Self {
        // La config peut avoir été construite à la main : on reborne
        let permits = config.max_concurrency.clamp(1, KafkaConsumerConfig::MAX_CONCURRENCY);

        Self {
            config,
            shutdown_token: CancellationToken::new(),
            concurrency_limit: Arc::new(Semaphore::new(permits)),
            permits: u32::try_from(permits).unwrap_or(u32::MAX),
        }
    }

    /// Partage le token d'arrêt (ex: plusieurs consumers arrêtés par le même signal)
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown_token = token;
        self
    }

    pub fn stop(&self) {
        log::info!("Signaling Kafka consumer '{}' to stop...", self.config.group_id);
        self.shutdown_token.cancel();
    }

    fn to_incoming(message: &BorrowedMessage<'_>) -> Option<IncomingMessage> {
        // Tombstone / payload vide : rien à traiter
        let payload = message.payload()?.to_vec();

        Some(IncomingMessage {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
            key: message.key().map(|k| k.to_vec()),
            payload,
        })
    }

    /// Attend la fin des handlers en cours en récupérant tous les permis
    async fn drain_in_flight(&self) {
        if let Ok(all) = self.concurrency_limit.acquire_many(self.permits).await {
            drop(all);
        }
    }
}

#[async_trait]
impl MessageConsumer for KafkaMessageConsumer {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        let consumer: StreamConsumer = self.config.client_config().create()?;
        consumer
            .subscribe(&[topic])
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        log::info!("📥 Subscribed to '{}' (group: {})", topic, self.config.group_id);

        let handler = Arc::new(handler);

        while !self.shutdown_token.is_cancelled() {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = consumer.recv() => {
                    // Le BorrowedMessage ne doit pas survivre à un .await
                    let incoming = match result {
                        Ok(message) => Self::to_incoming(&message),
                        Err(e) => {
                            log::error!("Kafka receive error: {}", e);
                            continue;
                        }
                    };

                    let Some(incoming) = incoming else {
                        log::debug!("Skipping message without payload");
                        continue;
                    };

                    let h = Arc::clone(&handler);
                    let permit = self.concurrency_limit.clone().acquire_owned().await
                        .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

                    tokio::spawn(async move {
                        let (partition, offset) = (incoming.partition, incoming.offset);
                        if let Err(e) = (h)(incoming).await {
                            log::error!("❌ Handler failed for message {}@{}: {}", partition, offset, e);
                        }
                        drop(permit);
                    });
                }
            }
        }

        self.drain_in_flight().await;
        log::info!("🛑 Kafka consumer loop stopped.");
        Ok(())
    }
}
