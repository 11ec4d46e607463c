//! Error types for the product mutation handlers.

use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors returned by [`ProductActions`](super::ProductActions).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// No identity was resolved for the caller.
    #[error("User not authenticated")]
    Unauthenticated,

    /// The submission broke at least one field rule. The per-field detail is logged, not returned.
    #[error("Validation failed")]
    ValidationFailed,

    #[error(transparent)]
    Store(#[from] ProductError),
}
