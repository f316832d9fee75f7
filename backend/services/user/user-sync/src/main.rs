// backend/services/user/user-sync/src/main.rs

use anyhow::Context;
use user::infrastructure::bootstrap::run_user_sync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_user_sync().await.context("user-sync stopped with an error")
}
