// crates/shared-kernel/src/domain/entities/entity.rs

use std::fmt::Display;
use chrono::{DateTime, Utc};

pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    /// Traduit le nom d'une contrainte SQL en nom de champ métier
    fn map_constraint_to_field(_constraint: &str) -> &'static str {
        "unique_constraint"
    }
}

pub trait Entity: EntityMetadata {
    type Id: Display + Clone + Send + Sync;

    fn id(&self) -> &Self::Id;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}
