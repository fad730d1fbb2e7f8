//! Catalog error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Store access failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
