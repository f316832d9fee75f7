// crates/user/src/infrastructure/kafka/user_info_event.rs

use serde::Deserialize;
use shared_kernel::application::FromDto;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::Result;

use crate::application::create_or_update_user::CreateOrUpdateUserCommand;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

/// Payload JSON publié sur le topic user-info.
/// Champs en snake_case, alias camelCase acceptés, champs inconnus ignorés.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoEvent {
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone_number: Option<PhoneField>,
    #[serde(default, alias = "profilePic")]
    pub profile_pic: Option<String>,
}

/// Certains producteurs envoient le téléphone comme un nombre JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PhoneField {
    Text(String),
    Number(u64),
}

impl PhoneField {
    fn into_phone(self) -> Result<Option<PhoneNumber>> {
        match self {
            PhoneField::Text(s) if s.trim().is_empty() => Ok(None),
            PhoneField::Text(s) => PhoneNumber::try_new(s).map(Some),
            PhoneField::Number(n) => PhoneNumber::from_number(n).map(Some),
        }
    }
}

impl FromDto<UserInfoEvent> for CreateOrUpdateUserCommand {
    fn from_dto(dto: UserInfoEvent) -> Result<Self> {
        let phone_number = match dto.phone_number {
            Some(field) => field.into_phone()?,
            None => None,
        };

        let profile_pic = match dto.profile_pic {
            Some(pic) if !pic.trim().is_empty() => Some(Url::try_new(pic)?),
            _ => None,
        };

        Ok(Self {
            user_id: UserId::try_new(dto.user_id)?,
            first_name: PersonName::try_new("first_name", dto.first_name)?,
            last_name: PersonName::try_new("last_name", dto.last_name)?,
            email: Email::try_new(dto.email)?,
            phone_number,
            profile_pic,
        })
    }
}
