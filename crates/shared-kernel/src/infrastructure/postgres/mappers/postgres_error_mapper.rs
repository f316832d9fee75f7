// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| {
            match e {
                sqlx::Error::RowNotFound => DomainError::NotFound {
                    entity: E::entity_name(),
                    id: "unknown".into(),
                },
                sqlx::Error::Database(db_err) => {
                    let code = db_err.code();

                    if code.as_deref() == Some(UNIQUE_VIOLATION) {
                        let field = db_err
                            .try_downcast_ref::<PgDatabaseError>()
                            .and_then(|pg| pg.constraint())
                            .map(E::map_constraint_to_field)
                            .unwrap_or("unique_constraint");

                        return DomainError::AlreadyExists {
                            entity: E::entity_name(),
                            field,
                            value: "already taken".into(),
                        };
                    }

                    // Sérialisation / deadlock : rejouable par with_retry
                    if matches!(code.as_deref(), Some(SERIALIZATION_FAILURE) | Some(DEADLOCK_DETECTED)) {
                        return DomainError::ConcurrencyConflict {
                            reason: format!("Concurrency conflict on {}", E::entity_name()),
                        };
                    }

                    DomainError::Infrastructure(db_err.message().into())
                }
                _ => DomainError::Infrastructure(e.to_string()),
            }
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl EntityMetadata for Dummy {
        fn entity_name() -> &'static str {
            "Dummy"
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        assert!(matches!(res.map_domain::<Dummy>(), Err(DomainError::NotFound { entity: "Dummy", .. })));
    }

    #[test]
    fn test_pool_errors_map_to_infrastructure() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        assert!(matches!(res.map_domain::<Dummy>(), Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_map_domain_infra_prefixes_context() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        match res.map_domain_infra("BeginTransaction") {
            Err(DomainError::Infrastructure(msg)) => assert!(msg.starts_with("BeginTransaction: ")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
