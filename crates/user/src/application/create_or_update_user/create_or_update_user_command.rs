// crates/user/src/application/create_or_update_user/create_or_update_user_command.rs

use shared_kernel::domain::value_objects::Url;

use crate::domain::entities::UserInfo;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

/// Commande déjà validée : chaque champ est un Value Object.
#[derive(Debug, Clone)]
pub struct CreateOrUpdateUserCommand {
    pub user_id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
    pub profile_pic: Option<Url>,
}

impl CreateOrUpdateUserCommand {
    /// Version "neuve" de l'utilisateur, telle que décrite par l'événement
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo::builder(
            self.user_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        )
        .with_phone(self.phone_number.clone())
        .with_profile_pic(self.profile_pic.clone())
        .build()
    }
}
