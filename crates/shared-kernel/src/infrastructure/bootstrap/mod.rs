// crates/shared-kernel/src/infrastructure/bootstrap/mod.rs

mod shutdown;
mod telemetry;

pub use shutdown::spawn_shutdown_listener;
pub use telemetry::init_tracing;
