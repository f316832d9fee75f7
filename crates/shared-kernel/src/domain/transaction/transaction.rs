// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Transaction opaque pour le domaine.
/// L'infrastructure retrouve son type concret via `as_any_mut` (downcast).
pub trait Transaction: Send + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
