//! # Inventory Actions
//!
//! Server-side mutation handlers for a per-user product inventory, built on the
//! [`resource_store`] actor.
//!
//! The interesting part is what happens *before* a write reaches storage: every
//! handler checks the caller's identity, validates the raw form input, and scopes
//! the mutation to rows the caller owns.
//!
//! ## Request Flow
//!
//! ```text
//! FormData ──► ProductSchema ──► ProductDraft ──► + user_id ──► ProductClient ──► ResourceActor<Product>
//!                   │
//!                   └─► ValidationErrors (logged, reported as ActionError::ValidationFailed)
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Handlers ([`actions`])
//! - **Role**: `create_product` and `delete_product`, the only way products change.
//! - **Key items**: [`ProductActions`](actions::ProductActions), [`Redirect`](actions::Redirect),
//!   [`ActionError`](actions::ActionError).
//!
//! ### 2. The Rules ([`schema`])
//! - **Role**: coercion and field constraints for product submissions.
//! - **Key items**: [`ProductSchema`](schema::ProductSchema), [`ValidationErrors`](schema::ValidationErrors).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: wraps the generic `ResourceClient` in an owner-aware product client.
//! - **Key items**: [`ProductClient`](clients::ProductClient).
//!
//! ### 4. The Store ([`product_actor`])
//! - **Role**: the [`ActorEntity`](resource_store::ActorEntity) implementation for [`Product`](model::Product),
//!   including the store-side owner constraint.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: configuration, tracing setup, startup and shutdown.
//! - **Key items**: [`InventorySystem`](lifecycle::InventorySystem), [`InventoryConfig`](lifecycle::InventoryConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```
//!
//! See [`resource_store::mock`] for testing handlers without a running store.

pub mod actions;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod schema;
