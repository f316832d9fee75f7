// crates/user/src/infrastructure/mod.rs

pub mod bootstrap;
pub mod config;
pub mod kafka;
pub mod postgres;
