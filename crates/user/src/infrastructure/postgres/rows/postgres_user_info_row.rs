// crates/user/src/infrastructure/postgres/rows/postgres_user_info_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::builders::UserInfoBuilder;
use crate::domain::entities::UserInfo;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostgresUserInfoRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresUserInfoRow> for UserInfo {
    type Error = DomainError;

    // Données déjà validées à l'écriture : reconstruction sans re-validation
    fn try_from(row: PostgresUserInfoRow) -> Result<Self> {
        Ok(UserInfoBuilder::restore(
            UserId::from_raw(row.user_id),
            PersonName::from_raw(row.first_name),
            PersonName::from_raw(row.last_name),
            Email::from_raw(row.email),
            row.phone_number.map(PhoneNumber::from_raw),
            row.profile_pic.map(Url::new_unchecked),
            row.created_at,
            row.updated_at,
        ))
    }
}

impl From<&UserInfo> for PostgresUserInfoRow {
    fn from(u: &UserInfo) -> Self {
        Self {
            user_id: u.user_id().to_string(),
            first_name: u.first_name().to_string(),
            last_name: u.last_name().to_string(),
            email: u.email().to_string(),
            phone_number: u.phone_number().map(|p| p.to_string()),
            profile_pic: u.profile_pic().map(|p| p.as_str().to_string()),
            created_at: u.created_at(),
            updated_at: u.updated_at(),
        }
    }
}
