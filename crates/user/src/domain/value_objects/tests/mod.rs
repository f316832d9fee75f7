// crates/user/src/domain/value_objects/tests/mod.rs

mod person_name_test;
mod user_id_test;
