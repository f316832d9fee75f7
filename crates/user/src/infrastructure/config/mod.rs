// crates/user/src/infrastructure/config/mod.rs

mod user_sync_config;

pub use user_sync_config::UserSyncConfig;
