// crates/user/src/domain/value_objects/tests/user_id_test.rs

use crate::domain::value_objects::UserId;
use shared_kernel::errors::DomainError;

#[test]
fn test_user_id_is_trimmed() {
    let id = UserId::try_new("  auth0|5f7c8ec7c33c6c004bbafe82 ").unwrap();
    assert_eq!(id.as_str(), "auth0|5f7c8ec7c33c6c004bbafe82");
}

#[test]
fn test_user_id_accepts_uuid() {
    let raw = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";
    assert_eq!(UserId::try_new(raw).unwrap().to_string(), raw);
}

#[test]
fn test_user_id_invalid() {
    let too_long = "x".repeat(UserId::MAX_LEN + 1);
    for raw in ["", "   ", "user 42", "user\t42", too_long.as_str()] {
        assert!(
            matches!(UserId::try_new(raw), Err(DomainError::Validation { field: "user_id", .. })),
            "Should be invalid: {raw:?}"
        );
    }
}

#[test]
fn test_user_id_serde() {
    let id: UserId = serde_json::from_str("\"u-42\"").unwrap();
    assert_eq!(id.as_str(), "u-42");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");
    assert!(serde_json::from_str::<UserId>("\"\"").is_err());
}
