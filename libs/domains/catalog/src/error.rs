use thiserror::Error;

/// Failures raised by catalog collaborators.
///
/// These never reach callers of [`crate::CatalogService`]: the service logs
/// them and reports an absent result instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
