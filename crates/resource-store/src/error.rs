//! # Store Errors
//!
//! Errors raised by the store plumbing itself. Entity-level failures (a rejected
//! create, a failing hook) travel inside [`FrameworkError::EntityError`].

/// Errors that can occur within the resource store.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
