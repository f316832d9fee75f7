// crates/user/src/domain/entities/mod.rs

mod user_info;

pub use user_info::UserInfo;

#[cfg(test)]
mod tests;
