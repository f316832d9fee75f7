// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use futures_util::future::BoxFuture;
use crate::domain::transaction::{FakeTransaction, TransactionManager, TransactionWork};
use crate::errors::Result;

/// Exécute le travail avec une `FakeTransaction` et compte les commits / rollbacks
#[derive(Default)]
pub struct StubTxManager {
    pub commits: AtomicUsize,
    pub rollbacks: AtomicUsize,
}

impl StubTxManager {
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(&'a self, work: TransactionWork<'a>) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let mut tx = FakeTransaction;
            let result = work(&mut tx).await;

            match &result {
                Ok(()) => self.commits.fetch_add(1, Ordering::SeqCst),
                Err(_) => self.rollbacks.fetch_add(1, Ordering::SeqCst),
            };

            result
        })
    }
}
