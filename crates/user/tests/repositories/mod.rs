// crates/user/tests/repositories/mod.rs

mod user_repository_it;
