use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failure inside a store backend (connection loss, malformed rows).
    /// Surfaced unchanged to callers; retry semantics belong to the backend.
    #[error("Store backend error: {0}")]
    BackendError(#[from] anyhow::Error),

    #[error(transparent)]
    CoreError(#[from] shindig_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
