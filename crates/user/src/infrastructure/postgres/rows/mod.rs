// crates/user/src/infrastructure/postgres/rows/mod.rs

mod postgres_user_info_row;

pub use postgres_user_info_row::PostgresUserInfoRow;
