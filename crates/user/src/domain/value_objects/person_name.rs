// crates/user/src/domain/value_objects/person_name.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Prénom ou nom de famille. La casse est conservée, seuls NFC + trim sont appliqués.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub const MAX_LEN: usize = 100;

    /// `field` ne sert qu'au message d'erreur ("first_name", "last_name")
    pub fn try_new(field: &'static str, value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let normalized: String = raw.trim().nfc().collect();

        Self::check(field, &normalized)?;

        Ok(Self(normalized))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(field: &'static str, value: &str) -> Result<()> {
        let len = value.chars().count();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field,
                reason: format!("Must be between 1 and {} characters", Self::MAX_LEN),
            });
        }

        if value.chars().any(char::is_control) {
            return Err(DomainError::Validation {
                field,
                reason: "Control characters are not allowed".into(),
            });
        }

        Ok(())
    }
}

impl ValueObject for PersonName {
    fn validate(&self) -> Result<()> {
        Self::check("name", &self.0)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
