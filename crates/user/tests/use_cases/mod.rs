// crates/user/tests/use_cases/mod.rs

mod user_info_consumer_it;
