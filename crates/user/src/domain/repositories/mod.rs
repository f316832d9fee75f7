// crates/user/src/domain/repositories/mod.rs

mod user_repository;

pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
mod user_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository_stub::UserRepositoryStub;
