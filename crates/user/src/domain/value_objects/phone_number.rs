// crates/user/src/domain/value_objects/phone_number.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// E.164 : '+', indicatif pays sans zéro de tête, 7 à 15 chiffres au total
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").expect("PHONE_REGEX is a valid pattern")
});

const SEPARATORS: [char; 5] = [' ', '-', '.', '(', ')'];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    inner: String,
}

impl PhoneNumber {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // Le préfixe national "(0)" n'a pas sa place en E.164
        if raw.contains("(0)") {
            return Err(Self::invalid("Trunk prefix '(0)' is not allowed in E.164"));
        }

        // Seuls les séparateurs sont retirés, tout autre caractère invalide le numéro
        let mut cleaned = String::with_capacity(raw.len());
        for c in raw.trim().chars() {
            match c {
                c if SEPARATORS.contains(&c) => continue,
                c if c.is_ascii_digit() || c == '+' => cleaned.push(c),
                other => return Err(Self::invalid(format!("Unexpected character {other:?}"))),
            }
        }

        let phone = Self::from_raw(cleaned);
        phone.validate()?;

        Ok(phone)
    }

    /// Numéro reçu sous forme d'entier dans l'événement : les chiffres internationaux sans le '+'
    pub fn from_number(value: u64) -> Result<Self> {
        Self::try_new(format!("+{value}"))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    fn invalid(reason: impl Into<String>) -> DomainError {
        DomainError::Validation {
            field: "phone_number",
            reason: reason.into(),
        }
    }
}

impl ValueObject for PhoneNumber {
    fn validate(&self) -> Result<()> {
        if !PHONE_REGEX.is_match(&self.inner) {
            return Err(Self::invalid("Must be E.164: '+' followed by 7 to 15 digits"));
        }

        Ok(())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.inner
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
