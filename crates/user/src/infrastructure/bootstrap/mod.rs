// crates/user/src/infrastructure/bootstrap/mod.rs

mod run_user_sync;

pub use run_user_sync::run_user_sync;
