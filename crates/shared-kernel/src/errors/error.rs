// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::{AppError, ErrorCode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String
    },

    /// Conflit de concurrence (sérialisation Postgres 40001)
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict {
        reason: String
    },

    /// Échec définitif après plusieurs tentatives de retry
    #[error("Operation failed after maximum retries: {0}")]
    TooManyConflicts(String),

    /// Erreur liée à l'infrastructure (DB, Kafka)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Utilisé par la boucle de Retry du Use Case
    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into()
            },
            ErrorCode::InfrastructureFailure => DomainError::Infrastructure(err.message),
            _ => DomainError::Internal(err.message),
        }
    }
}
