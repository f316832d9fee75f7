// crates/user/src/domain/mod.rs

pub mod builders;
pub mod entities;
pub mod repositories;
pub mod value_objects;
