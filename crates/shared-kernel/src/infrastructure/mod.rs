// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "kafka")]
pub mod kafka;

pub mod bootstrap;

mod retry;

pub use retry::{with_retry, RetryConfig};
