//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin down, per record type, what an id looks like, what a create
//! payload carries, and how rows are selected. A `Product` store only accepts a
//! `ProductCreate` payload and a `ProductFilter`; mixing them up is a compile error.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async and receive a `Context`, injected when the actor starts running
/// (`actor.run(context)`), not when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The storage-assigned identifier.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new row.
    type Create: Send + Sync + Debug;

    /// Row selector used by `find_many` and `delete_many`.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per record type rather than per operation; clients match on a
    /// single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full row from the storage-assigned ID and the payload.
    /// Returning an error here is how a record type enforces storage constraints.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this row is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the row is constructed and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every matched row before a `delete_many` removes anything.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
