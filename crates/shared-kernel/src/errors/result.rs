// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Entités, Value Objects, Use Cases, Repositories (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Consumers Kafka, Bootstrap, binaires.
/// Mélange erreurs techniques (Kafka down, pool KO) et erreurs métier.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Helper pour les erreurs de type "Internal" rapides
pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}
