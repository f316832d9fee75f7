// crates/shared-kernel/src/domain/value_objects/url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url as LibUrl;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// URL publique (http/https), normalisée par la crate `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    pub const MAX_LEN: usize = 2048;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let trimmed = raw.trim();

        let parsed = LibUrl::parse(trimmed).map_err(|_| DomainError::Validation {
            field: "url",
            reason: format!("Invalid URL format: {}", trimmed),
        })?;

        let url = Self(parsed.to_string());
        url.validate()?;

        Ok(url)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "url",
                reason: format!("URL cannot exceed {} characters", Self::MAX_LEN),
            });
        }

        let parsed = LibUrl::parse(&self.0).map_err(|_| DomainError::Validation {
            field: "url",
            reason: "Invalid URL state".into(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(DomainError::Validation {
                field: "url",
                reason: "Only http and https protocols are allowed".into(),
            }),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accepts_https_and_normalizes() {
        let url = Url::try_new("  https://cdn.example.com/avatars/42.png ").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/avatars/42.png");
    }

    #[test]
    fn test_url_rejects_other_schemes() {
        for raw in ["ftp://example.com/a.png", "javascript:alert(1)", "file:///etc/passwd"] {
            let res = Url::try_new(raw);
            assert!(matches!(res, Err(DomainError::Validation { field: "url", .. })), "{raw}");
        }
    }

    #[test]
    fn test_url_rejects_garbage() {
        assert!(Url::try_new("not a url").is_err());
        assert!(Url::try_new("").is_err());
    }
}
