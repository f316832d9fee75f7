// crates/user/src/domain/value_objects/user_id.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Identifiant émis par le service d'authentification (opaque, souvent un UUID).
/// Clé d'unicité de l'upsert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 255;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let id = Self(raw.trim().to_string());
        id.validate()?;
        Ok(id)
    }

    /// Reconstruction (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "User ID cannot be empty".into(),
            });
        }

        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: format!("User ID cannot exceed {} bytes", Self::MAX_LEN),
            });
        }

        if self.0.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "User ID cannot contain whitespace or control characters".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
