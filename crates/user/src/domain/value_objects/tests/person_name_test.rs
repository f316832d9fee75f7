// crates/user/src/domain/value_objects/tests/person_name_test.rs

use crate::domain::value_objects::PersonName;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::DomainError;

#[test]
fn test_name_is_trimmed_and_case_preserved() {
    let name = PersonName::try_new("first_name", "  McDonald ").unwrap();
    assert_eq!(name.as_str(), "McDonald");
}

#[test]
fn test_name_accepts_unicode() {
    for raw in ["Zoë", "José María", "李", "O'Connor", "Jean-Pierre"] {
        assert!(PersonName::try_new("first_name", raw).is_ok(), "{raw}");
    }
}

#[test]
fn test_empty_name_reports_the_given_field() {
    let err = PersonName::try_new("last_name", "   ").unwrap_err();
    assert!(matches!(err, DomainError::Validation { field: "last_name", .. }));
}

#[test]
fn test_name_length_limit() {
    let max = "a".repeat(PersonName::MAX_LEN);
    assert!(PersonName::try_new("first_name", max).is_ok());

    let too_long = "a".repeat(PersonName::MAX_LEN + 1);
    assert!(PersonName::try_new("first_name", too_long).is_err());
}

#[test]
fn test_name_rejects_control_characters() {
    assert!(PersonName::try_new("first_name", "Jo\u{0007}hn").is_err());
    assert!(PersonName::try_new("first_name", "Jo\nhn").is_err());
}

#[test]
fn test_from_raw_skips_validation() {
    let name = PersonName::from_raw("");
    assert!(name.validate().is_err());
}

#[test]
fn test_same_value_is_equal_whatever_the_field() {
    let a = PersonName::try_new("first_name", "Alex").unwrap();
    let b = PersonName::from_raw("Alex");
    assert_eq!(a, b);
}
