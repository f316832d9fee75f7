// crates/shared-kernel/src/application/dto.rs

use crate::errors::Result;

/// Convertit un DTO entrant (message Kafka, payload JSON) en commande
/// du domaine, en remontant les erreurs de validation.
pub trait FromDto<D> {
    fn from_dto(dto: D) -> Result<Self> where Self: Sized;
}
