//! # System Lifecycle
//!
//! Starting, wiring, and stopping the inventory system.
//!
//! - [`InventoryConfig`] - channel capacity and listing path, from defaults or the environment
//! - [`InventorySystem`] - spawns the product store and hands out its client and the handlers
//! - [`setup_tracing`] - one-time subscriber setup, driven by `RUST_LOG`
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the store's channel
//! 2. **Store detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the task handle reports whether the store exited cleanly
//!
//! Clones of the product client held elsewhere keep the store alive, so drop them
//! before calling [`InventorySystem::shutdown`].

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use tracing::*;
