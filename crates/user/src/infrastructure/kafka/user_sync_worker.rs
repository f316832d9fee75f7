// crates/user/src/infrastructure/kafka/user_sync_worker.rs

use std::sync::Arc;
use futures_util::future::{self, Either, FutureExt};
use shared_kernel::application::ports::MessageConsumer;
use shared_kernel::errors::AppResult;

use crate::infrastructure::kafka::{RawMessageConsumer, UserInfoConsumer};

/// Relie les listeners à leurs boucles de consommation.
/// Le listener principal et le tap brut tournent en parallèle sur le même topic,
/// chacun avec son propre consumer (donc son propre group id).
/// Une panne du tap est loggée, la synchro continue.
pub struct UserSyncWorker {
    topic: String,
    consumer: Arc<dyn MessageConsumer>,
    listener: Arc<UserInfoConsumer>,
    raw_tap: Option<(Arc<dyn MessageConsumer>, Arc<RawMessageConsumer>)>,
}

impl UserSyncWorker {
    pub fn new(
        topic: impl Into<String>,
        consumer: Arc<dyn MessageConsumer>,
        listener: Arc<UserInfoConsumer>,
    ) -> Self {
        Self {
            topic: topic.into(),
            consumer,
            listener,
            raw_tap: None,
        }
    }

    pub fn with_raw_tap(mut self, consumer: Arc<dyn MessageConsumer>, tap: Arc<RawMessageConsumer>) -> Self {
        self.raw_tap = Some((consumer, tap));
        self
    }

    /// Rend la main quand la boucle principale s'arrête. Seule son erreur est propagée.
    pub async fn run(self) -> AppResult<()> {
        tracing::info!("🚀 User sync worker listening on '{}'", self.topic);

        let main_loop = self.consumer.consume(&self.topic, Arc::clone(&self.listener).handler()).boxed();

        let result = match &self.raw_tap {
            None => main_loop.await,
            Some((raw_consumer, tap)) => {
                tracing::info!("🔎 Raw message tap enabled on '{}'", self.topic);
                let tap_loop = raw_consumer.consume(&self.topic, Arc::clone(tap).handler()).boxed();

                match future::select(main_loop, tap_loop).await {
                    // Arrêt normal : le tap partage le token, on le laisse drainer
                    Either::Left((Ok(()), tap_loop)) => {
                        log_tap_result(tap_loop.await);
                        Ok(())
                    }
                    Either::Left((Err(e), _)) => Err(e),
                    Either::Right((tap_result, main_loop)) => {
                        log_tap_result(tap_result);
                        main_loop.await
                    }
                }
            }
        };

        result?;

        tracing::info!("👋 User sync worker stopped");
        Ok(())
    }
}

fn log_tap_result(result: AppResult<()>) {
    if let Err(e) = result {
        tracing::error!(code = ?e.code, "❌ Raw message tap stopped: {}", e.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;
    use async_trait::async_trait;
    use shared_kernel::application::ports::{IncomingMessage, MessageHandler};
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::errors::{AppError, ErrorCode};
    use crate::application::create_or_update_user::CreateOrUpdateUserUseCase;
    use crate::domain::repositories::UserRepositoryStub;

    /// Rejoue une liste de payloads puis rend la main, comme un consumer arrêté
    struct ReplayConsumer {
        payloads: Vec<Vec<u8>>,
        topics_seen: Mutex<Vec<String>>,
        fail: bool,
        delay: Duration,
    }

    impl ReplayConsumer {
        fn new(payloads: Vec<&[u8]>) -> Self {
            Self {
                payloads: payloads.into_iter().map(|p| p.to_vec()).collect(),
                topics_seen: Mutex::new(Vec::new()),
                fail: false,
                delay: Duration::ZERO,
            }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::new(vec![]) }
        }

        fn delayed(delay: Duration, payloads: Vec<&[u8]>) -> Self {
            Self { delay, ..Self::new(payloads) }
        }
    }

    #[async_trait]
    impl MessageConsumer for ReplayConsumer {
        async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
            self.topics_seen.lock().unwrap().push(topic.to_string());
            if self.fail {
                return Err(AppError::new(ErrorCode::InfrastructureFailure, "broker unreachable"));
            }
            tokio::time::sleep(self.delay).await;
            for payload in &self.payloads {
                handler(IncomingMessage::from_payload(topic, payload.clone())).await?;
            }
            Ok(())
        }
    }

    fn listener() -> (Arc<UserInfoConsumer>, Arc<UserRepositoryStub>) {
        let repo = Arc::new(UserRepositoryStub::new());
        let use_case = CreateOrUpdateUserUseCase::new(repo.clone(), Arc::new(StubTxManager::default()));
        (Arc::new(UserInfoConsumer::new(Arc::new(use_case))), repo)
    }

    #[tokio::test]
    async fn test_messages_flow_to_repository_and_bad_ones_are_skipped() {
        let (listener, repo) = listener();
        let consumer = Arc::new(ReplayConsumer::new(vec![
            &br#"{"user_id":"u-1","first_name":"A","last_name":"B","email":"a@b.io"}"#[..],
            &b"not json"[..],
            &br#"{"user_id":"u-2","first_name":"C","last_name":"D","email":"c@d.io"}"#[..],
            &br#"{"user_id":"u-1","first_name":"A2","last_name":"B","email":"a@b.io"}"#[..],
        ]));

        UserSyncWorker::new("user_service", consumer.clone(), listener).run().await.unwrap();

        assert_eq!(repo.save_count(), 3);
        assert_eq!(repo.users.lock().unwrap().len(), 2);
        assert_eq!(repo.get("u-1").unwrap().first_name().as_str(), "A2");
        assert_eq!(*consumer.topics_seen.lock().unwrap(), vec!["user_service".to_string()]);
    }

    #[tokio::test]
    async fn test_raw_tap_subscribes_to_same_topic() {
        let (listener, repo) = listener();
        let main = Arc::new(ReplayConsumer::new(vec![]));
        let raw = Arc::new(ReplayConsumer::new(vec![&b"\xff\xfe raw bytes"[..]]));

        UserSyncWorker::new("user_service", main, listener)
            .with_raw_tap(raw.clone(), Arc::new(RawMessageConsumer::new()))
            .run()
            .await
            .unwrap();

        assert_eq!(*raw.topics_seen.lock().unwrap(), vec!["user_service".to_string()]);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_consumer_failure_is_reported() {
        let (listener, _) = listener();

        let res = UserSyncWorker::new("user_service", Arc::new(ReplayConsumer::failing()), listener)
            .run()
            .await;

        assert_eq!(res.unwrap_err().code, ErrorCode::InfrastructureFailure);
    }

    #[tokio::test]
    async fn test_failing_raw_tap_does_not_stop_the_sync() {
        let (listener, repo) = listener();
        let main = Arc::new(ReplayConsumer::delayed(
            Duration::from_millis(50),
            vec![&br#"{"user_id":"u-1","first_name":"A","last_name":"B","email":"a@b.io"}"#[..]],
        ));
        let raw = Arc::new(ReplayConsumer::failing());

        UserSyncWorker::new("user_service", main, listener)
            .with_raw_tap(raw.clone(), Arc::new(RawMessageConsumer::new()))
            .run()
            .await
            .unwrap();

        assert_eq!(raw.topics_seen.lock().unwrap().len(), 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_main_loop_failure_is_reported_even_with_raw_tap() {
        let (listener, _) = listener();
        let raw = Arc::new(ReplayConsumer::delayed(Duration::from_secs(60), vec![]));

        let res = UserSyncWorker::new("user_service", Arc::new(ReplayConsumer::failing()), listener)
            .with_raw_tap(raw, Arc::new(RawMessageConsumer::new()))
            .run()
            .await;

        assert_eq!(res.unwrap_err().code, ErrorCode::InfrastructureFailure);
    }
}
