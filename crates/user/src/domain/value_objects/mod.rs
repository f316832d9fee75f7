// crates/user/src/domain/value_objects/mod.rs

mod email;
mod person_name;
mod phone_number;
mod user_id;

pub use email::Email;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use user_id::UserId;

#[cfg(test)]
mod tests;
