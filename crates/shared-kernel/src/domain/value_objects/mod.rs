// crates/shared-kernel/src/domain/value_objects/mod.rs

mod url;
mod value_object;

pub use url::Url;
pub use value_object::ValueObject;
