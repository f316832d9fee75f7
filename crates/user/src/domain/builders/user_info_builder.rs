// crates/user/src/domain/builders/user_info_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Url;

use crate::domain::entities::UserInfo;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

pub struct UserInfoBuilder {
    user_id: UserId,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    phone_number: Option<PhoneNumber>,
    profile_pic: Option<Url>,
}

impl UserInfoBuilder {
    /// Chemin 1 : CRÉATION (événement entrant)
    pub fn new(user_id: UserId, first_name: PersonName, last_name: PersonName, email: Email) -> Self {
        Self {
            user_id,
            first_name,
            last_name,
            email,
            phone_number: None,
            profile_pic: None,
        }
    }

    /// Chemin 2 : RESTAURATION (Repository), sans validation ni valeur par défaut
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        user_id: UserId,
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
        phone_number: Option<PhoneNumber>,
        profile_pic: Option<Url>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> UserInfo {
        UserInfo {
            user_id,
            first_name,
            last_name,
            email,
            phone_number,
            profile_pic,
            created_at,
            updated_at,
        }
    }

    pub fn with_phone(mut self, phone: Option<PhoneNumber>) -> Self {
        self.phone_number = phone;
        self
    }

    pub fn with_profile_pic(mut self, url: Option<Url>) -> Self {
        self.profile_pic = url;
        self
    }

    pub fn build(self) -> UserInfo {
        let now = Utc::now();

        UserInfo {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            profile_pic: self.profile_pic,
            created_at: now,
            updated_at: now,
        }
    }
}
