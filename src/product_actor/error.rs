//! Error types for the Product store.

use thiserror::Error;

/// Errors that can occur during product storage operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The store refused a product without an owner.
    #[error("Product must have an owning user")]
    MissingOwner,

    /// The store refused a product whose numeric fields break its column constraints.
    #[error("Product constraint violated: {0}")]
    ConstraintViolation(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
