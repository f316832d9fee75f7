// crates/user/src/domain/entities/user_info.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::value_objects::Url;

use crate::domain::builders::UserInfoBuilder;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

/// Profil utilisateur synchronisé depuis le topic Kafka.
///
/// Une seule ligne par `user_id`. `created_at` est figé à la première
/// insertion, `updated_at` bouge à chaque upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub(crate) user_id: UserId,
    pub(crate) first_name: PersonName,
    pub(crate) last_name: PersonName,
    pub(crate) email: Email,
    pub(crate) phone_number: Option<PhoneNumber>,
    pub(crate) profile_pic: Option<Url>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl UserInfo {
    pub fn builder(
        user_id: UserId,
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
    ) -> UserInfoBuilder {
        UserInfoBuilder::new(user_id, first_name, last_name, email)
    }

    // --- Getters ---
    pub fn user_id(&self) -> &UserId { &self.user_id }
    pub fn first_name(&self) -> &PersonName { &self.first_name }
    pub fn last_name(&self) -> &PersonName { &self.last_name }
    pub fn email(&self) -> &Email { &self.email }
    pub fn phone_number(&self) -> Option<&PhoneNumber> { self.phone_number.as_ref() }
    pub fn profile_pic(&self) -> Option<&Url> { self.profile_pic.as_ref() }

    /// Applique la version entrante sur l'enregistrement existant.
    /// L'identité et `created_at` ne bougent pas. Retourne `true` si un champ métier a changé.
    pub fn refresh_from(&mut self, incoming: UserInfo) -> bool {
        let changed = self.first_name != incoming.first_name
            || self.last_name != incoming.last_name
            || self.email != incoming.email
            || self.phone_number != incoming.phone_number
            || self.profile_pic != incoming.profile_pic;

        self.first_name = incoming.first_name;
        self.last_name = incoming.last_name;
        self.email = incoming.email;
        self.phone_number = incoming.phone_number;
        self.profile_pic = incoming.profile_pic;

        // Le timestamp ne recule jamais, même si l'horloge du pod est en retard
        self.updated_at = Utc::now().max(self.updated_at);

        changed
    }
}

impl EntityMetadata for UserInfo {
    fn entity_name() -> &'static str {
        "UserInfo"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "users_info_pkey" => "user_id",
            _ => "unique_constraint",
        }
    }
}

impl Entity for UserInfo {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.user_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
