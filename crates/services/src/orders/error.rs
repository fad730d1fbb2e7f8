//! Order error types.

use thiserror::Error;

use bamboo_box_core::TransitionError;

use crate::store::StoreError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the given id.
    #[error("order not found")]
    OrderNotFound,

    /// The requested status change is not in the transition table.
    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    /// Store access failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
