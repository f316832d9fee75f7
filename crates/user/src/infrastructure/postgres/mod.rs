// crates/user/src/infrastructure/postgres/mod.rs

pub mod repositories;
pub mod rows;
pub mod utils;
