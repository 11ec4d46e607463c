//! # Resource Store
//!
//! An in-memory, actor-backed storage engine for owned records. Each record type gets
//! its own [`ResourceActor`] running in a Tokio task; callers talk to it through a
//! cloneable [`ResourceClient`].
//!
//! ## Why an actor?
//!
//! - **Isolated state**: the actor owns its `HashMap`, so there are no locks.
//! - **Sequential processing**: requests are handled one at a time, which gives every
//!   operation (including a multi-row `delete_many`) the atomicity a real database
//!   would provide.
//! - **Uniform API**: any type implementing [`ActorEntity`] gets create, get,
//!   find-many and delete-many for free.
//!
//! ## Filters instead of primary-key deletes
//!
//! Reads and deletes are expressed with the entity's own [`ActorEntity::Filter`] type.
//! A filter that matches nothing is not an error: `delete_many` simply reports `0`.
//! This is what makes ownership scoping cheap: a delete filtered by `id` *and* owner
//! is a no-op for anyone who does not own the row.
//!
//! ## Module Tour
//!
//! - [`entity`]: the [`ActorEntity`] contract and its lifecycle hooks.
//! - [`actor`]: the [`ResourceActor`] event loop.
//! - [`client`]: the [`ResourceClient`] request/response API.
//! - [`client_trait`]: [`ActorClient`], shared plumbing for domain-specific clients.
//! - [`message`]: the [`ResourceRequest`] protocol.
//! - [`error`]: [`FrameworkError`].
//! - [`mock`]: test doubles for exercising clients without a running actor.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_store::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, owner: String }
//! #[derive(Debug)] struct NoteCreate { owner: String }
//! #[derive(Debug)] struct NoteFilter { owner: String }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Filter = NoteFilter;
//!     type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, owner: params.owner })
//!     }
//!     fn matches(&self, filter: &NoteFilter) -> bool { self.owner == filter.owner }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client.create(NoteCreate { owner: "alice".into() }).await.unwrap();
//!     let removed = client.delete_many(NoteFilter { owner: "bob".into() }).await.unwrap();
//!     assert_eq!(removed, 0);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
