// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use futures_util::future::BoxFuture;
use sqlx::{Pool, Postgres};
use crate::domain::transaction::{Transaction, TransactionManager, TransactionWork};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;
use crate::errors::Result;

pub struct PostgresTransactionManager {
    pool: Pool<Postgres>,
}

impl PostgresTransactionManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(&'a self, work: TransactionWork<'a>) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
            let mut wrapped = PostgresTransaction::new(tx);

            let result = {
                let tx_ref: &mut dyn Transaction = &mut wrapped;
                work(tx_ref).await
            };

            match result {
                Ok(()) => wrapped
                    .into_inner()
                    .commit()
                    .await
                    .map_domain_infra("Failed to commit transaction"),
                Err(e) => {
                    if let Err(rollback_err) = wrapped.into_inner().rollback().await {
                        tracing::warn!("⚠️ Rollback failed after error '{}': {}", e, rollback_err);
                    }
                    Err(e)
                }
            }
        })
    }
}
