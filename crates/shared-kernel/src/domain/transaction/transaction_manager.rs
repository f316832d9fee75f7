// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use futures_util::future::BoxFuture;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

/// Unité de travail exécutée à l'intérieur d'une transaction.
/// La transaction n'est prêtée que pour la durée du futur ('t).
pub type TransactionWork<'a> =
    Box<dyn for<'t> FnOnce(&'t mut dyn Transaction) -> BoxFuture<'t, Result<()>> + Send + 'a>;

pub trait TransactionManager: Send + Sync {
    /// Commit si `work` réussit, rollback sinon.
    fn in_transaction<'a>(&'a self, work: TransactionWork<'a>) -> BoxFuture<'a, Result<()>>;
}

/// Helper générique pour éviter le `Box::new` côté Use Case
pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F>(&'a self, f: F) -> BoxFuture<'a, Result<()>>
    where
        F: for<'t> FnOnce(&'t mut dyn Transaction) -> BoxFuture<'t, Result<()>> + Send + 'a,
    {
        self.in_transaction(Box::new(f))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
