// crates/shared-kernel/src/infrastructure/kafka/kafka_consumer_config.rs

use std::env;
use rdkafka::config::ClientConfig;
use tokio::sync::Semaphore;

/// Paramètres du consumer Kafka, chargés depuis l'environnement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaConsumerConfig {
    pub brokers: String,
    pub group_id: String,
    pub max_concurrency: usize,
    pub auto_offset_reset: String,
}

impl Default for KafkaConsumerConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            group_id: "default-group".to_string(),
            // 1 = traitement séquentiel, l'ordre d'arrivée est conservé
            max_concurrency: 1,
            auto_offset_reset: "earliest".to_string(),
        }
    }
}

impl KafkaConsumerConfig {
    /// Borne haute des permis : le drain les réclame tous d'un coup via `acquire_many(u32)`
    pub const MAX_CONCURRENCY: usize = if Semaphore::MAX_PERMITS < u32::MAX as usize {
        Semaphore::MAX_PERMITS
    } else {
        u32::MAX as usize
    };

    /// KAFKA_BROKERS, KAFKA_GROUP_ID, KAFKA_MAX_CONCURRENCY, KAFKA_AUTO_OFFSET_RESET
    pub fn from_env(default_group_id: &str) -> Self {
        Self::from_lookup(default_group_id, |key| env::var(key).ok())
    }

    /// Variante injectable de `from_env` (tests, configs composées)
    pub fn from_lookup<F>(default_group_id: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            brokers: lookup("KAFKA_BROKERS").unwrap_or(defaults.brokers),
            group_id: lookup("KAFKA_GROUP_ID").unwrap_or_else(|| default_group_id.to_string()),
            max_concurrency: lookup("KAFKA_MAX_CONCURRENCY")
                .and_then(|v| v.parse().ok())
                .filter(|v: &usize| *v > 0)
                .map(Self::clamp_concurrency)
                .unwrap_or(defaults.max_concurrency),
            auto_offset_reset: lookup("KAFKA_AUTO_OFFSET_RESET").unwrap_or(defaults.auto_offset_reset),
        }
    }

    pub fn with_brokers(mut self, brokers: impl Into<String>) -> Self {
        self.brokers = brokers.into();
        self
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = Self::clamp_concurrency(max);
        self
    }

    fn clamp_concurrency(value: usize) -> usize {
        value.clamp(1, Self::MAX_CONCURRENCY)
    }

    pub(crate) fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.brokers)
            .set("group.id", &self.group_id)
            .set("enable.auto.commit", "true")
            .set("auto.commit.interval.ms", "5000")
            .set("auto.offset.reset", &self.auto_offset_reset)
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");
        config
    }
}
