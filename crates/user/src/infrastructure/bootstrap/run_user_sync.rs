// crates/user/src/infrastructure/bootstrap/run_user_sync.rs

use std::sync::Arc;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::bootstrap::{init_tracing, spawn_shutdown_listener};
use shared_kernel::infrastructure::kafka::KafkaMessageConsumer;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;
use tokio_util::sync::CancellationToken;

use crate::application::create_or_update_user::CreateOrUpdateUserUseCase;
use crate::infrastructure::config::UserSyncConfig;
use crate::infrastructure::kafka::{RawMessageConsumer, UserInfoConsumer, UserSyncWorker};
use crate::infrastructure::postgres::repositories::PostgresUserRepository;
use crate::infrastructure::postgres::utils::run_postgres_migrations;

/// Point d'entrée du service : config, pool, migrations, câblage, puis boucle Kafka
/// jusqu'au Ctrl+C.
pub async fn run_user_sync() -> AppResult<()> {
    init_tracing();
    tracing::info!("🛠️ Starting user-sync service...");

    // 1. CONFIGURATION
    let config = UserSyncConfig::from_env();
    let pg = PostgresContext::builder()?.build().await?;

    // 2. SCHÉMA
    run_postgres_migrations(&pg.pool()).await?;

    // 3. CÂBLAGE
    let user_repo = Arc::new(PostgresUserRepository::new(pg.pool()));
    let tx_manager = Arc::new(PostgresTransactionManager::new(pg.pool()));
    let use_case = Arc::new(CreateOrUpdateUserUseCase::new(user_repo, tx_manager));
    let listener = Arc::new(UserInfoConsumer::new(use_case));

    // 4. ARRÊT PROPRE : un seul token pour tous les consumers
    let shutdown = CancellationToken::new();
    let signal_task = spawn_shutdown_listener(shutdown.clone());

    let consumer = Arc::new(
        KafkaMessageConsumer::new(config.kafka.clone()).with_shutdown_token(shutdown.clone()),
    );
    let mut worker = UserSyncWorker::new(config.topic.clone(), consumer, listener);

    if config.raw_message_logging {
        let raw_consumer = Arc::new(
            KafkaMessageConsumer::new(config.raw_kafka()).with_shutdown_token(shutdown.clone()),
        );
        worker = worker.with_raw_tap(raw_consumer, Arc::new(RawMessageConsumer::new()));
    }

    let result = worker.run().await;

    // Une boucle en erreur arrête aussi les autres et le listener de signal
    shutdown.cancel();
    let _ = signal_task.await;

    result
}
