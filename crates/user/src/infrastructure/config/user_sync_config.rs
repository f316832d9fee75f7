// crates/user/src/infrastructure/config/user_sync_config.rs

use shared_kernel::infrastructure::kafka::KafkaConsumerConfig;

const DEFAULT_TOPIC: &str = "user_service";
const DEFAULT_GROUP_ID: &str = "user-service";

/// Configuration du worker de synchronisation (hors Postgres, lue par `PostgresContextBuilder`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSyncConfig {
    pub topic: String,
    pub kafka: KafkaConsumerConfig,
    pub raw_message_logging: bool,
}

impl UserSyncConfig {
    /// USER_INFO_TOPIC, RAW_MESSAGE_LOGGING, plus les variables KAFKA_*
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let kafka = KafkaConsumerConfig::from_lookup(DEFAULT_GROUP_ID, &lookup);

        Self {
            topic: lookup("USER_INFO_TOPIC")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            kafka,
            raw_message_logging: lookup("RAW_MESSAGE_LOGGING")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(false),
        }
    }

    /// Le tap brut a son propre group id pour recevoir tous les messages
    /// sans prendre de partitions au listener principal.
    pub fn raw_kafka(&self) -> KafkaConsumerConfig {
        let group_id = format!("{}-raw", self.kafka.group_id);
        self.kafka.clone().with_group_id(group_id)
    }
}
