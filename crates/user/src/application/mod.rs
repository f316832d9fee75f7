// crates/user/src/application/mod.rs

pub mod create_or_update_user;
