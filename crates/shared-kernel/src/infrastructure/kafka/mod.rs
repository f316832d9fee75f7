// crates/shared-kernel/src/infrastructure/kafka/mod.rs

mod kafka_consumer_config;
mod kafka_message_consumer;

pub use kafka_consumer_config::KafkaConsumerConfig;
pub use kafka_message_consumer::KafkaMessageConsumer;
