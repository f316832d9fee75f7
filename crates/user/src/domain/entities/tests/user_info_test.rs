// crates/user/src/domain/entities/tests/user_info_test.rs

use chrono::{Duration, Utc};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::value_objects::Url;

use crate::domain::builders::UserInfoBuilder;
use crate::domain::entities::UserInfo;
use crate::domain::value_objects::{Email, PersonName, PhoneNumber, UserId};

fn user(first: &str, email: &str) -> UserInfo {
    UserInfo::builder(
        UserId::try_new("u-1").unwrap(),
        PersonName::try_new("first_name", first).unwrap(),
        PersonName::try_new("last_name", "Doe").unwrap(),
        Email::try_new(email).unwrap(),
    )
    .build()
}

#[test]
fn test_build_sets_both_timestamps() {
    let u = user("John", "john@doe.com");

    assert_eq!(u.created_at(), u.updated_at());
    assert!(u.phone_number().is_none());
    assert!(u.profile_pic().is_none());
    assert_eq!(u.id().as_str(), "u-1");
    assert_eq!(u.last_name().as_str(), "Doe");
}

#[test]
fn test_builder_optional_fields() {
    let u = UserInfo::builder(
        UserId::try_new("u-2").unwrap(),
        PersonName::try_new("first_name", "Ada").unwrap(),
        PersonName::try_new("last_name", "Lovelace").unwrap(),
        Email::try_new("ada@example.com").unwrap(),
    )
    .with_phone(Some(PhoneNumber::try_new("+447700900123").unwrap()))
    .with_profile_pic(Some(Url::try_new("https://cdn.example.com/ada.png").unwrap()))
    .build();

    assert_eq!(u.phone_number().map(|p| p.as_str()), Some("+447700900123"));
    assert_eq!(u.profile_pic().map(|p| p.as_str()), Some("https://cdn.example.com/ada.png"));
}

#[test]
fn test_refresh_keeps_identity_and_created_at() {
    let created = Utc::now() - Duration::days(3);
    let mut existing = UserInfoBuilder::restore(
        UserId::from_raw("u-1"),
        PersonName::from_raw("John"),
        PersonName::from_raw("Doe"),
        Email::from_raw("john@doe.com"),
        None,
        None,
        created,
        created,
    );

    let changed = existing.refresh_from(user("Johnny", "johnny@doe.com"));

    assert!(changed);
    assert_eq!(existing.created_at(), created);
    assert!(existing.updated_at() > created);
    assert_eq!(existing.first_name().as_str(), "Johnny");
    assert_eq!(existing.email().as_str(), "johnny@doe.com");
    assert_eq!(existing.user_id().as_str(), "u-1");
}

#[test]
fn test_refresh_with_same_values_reports_no_change() {
    let mut existing = user("John", "john@doe.com");
    let changed = existing.refresh_from(user("John", "john@doe.com"));
    assert!(!changed);
}

#[test]
fn test_refresh_can_clear_optional_fields() {
    let mut existing = user("John", "john@doe.com");
    existing.phone_number = Some(PhoneNumber::from_raw("+33612345678"));

    assert!(existing.refresh_from(user("John", "john@doe.com")));
    assert!(existing.phone_number().is_none());
}

#[test]
fn test_primary_key_constraint_maps_to_user_id() {
    assert_eq!(UserInfo::map_constraint_to_field("users_info_pkey"), "user_id");
    assert_eq!(UserInfo::map_constraint_to_field("other"), "unique_constraint");
    assert_eq!(UserInfo::entity_name(), "UserInfo");
}
