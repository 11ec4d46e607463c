//! # Product Store
//!
//! The product record type wired into a [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_store::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use inventory_actions::product_actor;
//! use inventory_actions::model::{LowStockAt, ProductCreate, UserId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: 29.99,
//!         quantity: 100,
//!         sku: None,
//!         low_stock_at: LowStockAt::At(10),
//!         user_id: UserId::from("user_1"),
//!     };
//!     let id = client.create_product(params).await?;
//!
//!     // Nobody else can delete it
//!     let removed = client.delete_owned(&id.to_string(), &UserId::from("user_2")).await?;
//!     assert_eq!(removed, 0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_store::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
