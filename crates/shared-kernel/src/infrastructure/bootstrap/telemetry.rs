// crates/shared-kernel/src/infrastructure/bootstrap/telemetry.rs

use tracing_subscriber::EnvFilter;

/// Installe le subscriber `fmt` global (RUST_LOG, défaut "info").
/// Les macros `log::` sont aussi capturées via le pont tracing-log.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Déjà initialisé (tests, double bootstrap) : on garde le premier
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
