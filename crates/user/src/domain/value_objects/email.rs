// crates/user/src/domain/value_objects/email.rs

use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use seahash::SeaHasher;
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Partie locale sans point en tête/fin ni double point, domaine avec TLD obligatoire
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$")
        .expect("EMAIL_REGEX is a valid pattern")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
    #[serde(skip)]
    hash: u64,
}

impl Email {
    pub const MAX_LEN: usize = 254;

    /// Constructeur sécurisé (NFC + lowercase + trim, puis validation)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let email = Self::from_raw(normalized);
        email.validate()?;

        Ok(email)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        let address = value.into();
        let mut hasher = SeaHasher::new();
        address.hash(&mut hasher);

        Self {
            address,
            hash: hasher.finish(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Empreinte stable, utilisée dans les logs à la place de l'adresse
    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        let len = self.address.len();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "email",
                reason: format!("Email length must be between 1 and {} chars", Self::MAX_LEN),
            });
        }

        if !EMAIL_REGEX.is_match(&self.address) {
            return Err(DomainError::Validation {
                field: "email",
                reason: "Invalid email format".into(),
            });
        }

        Ok(())
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}
