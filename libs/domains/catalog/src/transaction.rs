//! Unit-of-work scoping for repository calls

use async_trait::async_trait;
use std::future::Future;

use crate::error::CatalogResult;

/// Opens transactions on the underlying store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin_transaction(&self) -> CatalogResult<Box<dyn Transaction>>;
}

/// An open transaction. Dropping it without committing is a rollback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transaction: Send {
    async fn commit(&mut self) -> CatalogResult<()>;

    async fn rollback(&mut self) -> CatalogResult<()>;
}

/// Run `action` inside a transaction and collapse every failure into `None`.
///
/// The transaction is committed when `action` succeeds and rolled back when
/// it fails. Failures to begin or commit are reported the same way as a
/// failing action; a failing rollback is only logged.
pub async fn execute_safe<U, T, F, Fut>(
    unit_of_work: &U,
    operation: &'static str,
    action: F,
) -> Option<T>
where
    U: UnitOfWork + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = CatalogResult<Option<T>>>,
{
    let mut transaction = match unit_of_work.begin_transaction().await {
        Ok(transaction) => transaction,
        Err(e) => {
            tracing::error!(operation, error = %e, "Failed to begin transaction");
            return None;
        }
    };
    tracing::debug!(operation, "Transaction started");

    match action().await {
        Ok(value) => match transaction.commit().await {
            Ok(()) => {
                tracing::debug!(operation, "Transaction committed");
                value
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "Failed to commit transaction");
                None
            }
        },
        Err(e) => {
            tracing::error!(operation, error = %e, "Catalog operation failed, rolling back");
            if let Err(rollback_error) = transaction.rollback().await {
                tracing::error!(operation, error = %rollback_error, "Rollback failed");
            }
            None
        }
    }
}
