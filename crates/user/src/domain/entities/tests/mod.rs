// crates/user/src/domain/entities/tests/mod.rs

mod user_info_test;
