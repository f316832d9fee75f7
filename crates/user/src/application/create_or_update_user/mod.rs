// crates/user/src/application/create_or_update_user/mod.rs

mod create_or_update_user_command;
mod create_or_update_user_use_case;


pub use create_or_update_user_command::CreateOrUpdateUserCommand;
pub use create_or_update_user_use_case::{CreateOrUpdateUserUseCase, UpsertOutcome};
