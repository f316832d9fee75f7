// crates/user/src/infrastructure/kafka/mod.rs

mod raw_message_consumer;
mod user_info_consumer;
mod user_info_event;
mod user_sync_worker;

pub use raw_message_consumer::RawMessageConsumer;
pub use user_info_consumer::UserInfoConsumer;
pub use user_info_event::{PhoneField, UserInfoEvent};
pub use user_sync_worker::UserSyncWorker;
