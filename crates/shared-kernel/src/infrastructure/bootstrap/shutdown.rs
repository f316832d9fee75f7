// crates/shared-kernel/src/infrastructure/bootstrap/shutdown.rs

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Annule `token` à la réception de Ctrl+C / SIGINT.
pub fn spawn_shutdown_listener(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    tracing::warn!("🛑 Shutdown signal received, stopping consumers...");
                    token.cancel();
                }
                Err(err) => {
                    tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
                }
            }
        }
    })
}
