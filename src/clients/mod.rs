//! Type-safe wrappers around [`ResourceClient`](resource_store::ResourceClient).

pub mod product_client;

pub use product_client::*;
