// crates/user/src/domain/builders/mod.rs

mod user_info_builder;

pub use user_info_builder::UserInfoBuilder;
