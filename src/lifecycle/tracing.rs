//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that hides the
//! module prefix (`with_target(false)`); the store tags its own lines with `entity_type`.
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # outcomes: created, deleted, rejected
//! RUST_LOG=debug cargo run    # plus request payloads and delete counts
//! ```
//!
//! ## What Gets Logged
//!
//! | event | level |
//! |---|---|
//! | unauthenticated caller | `WARN` |
//! | validation failure, with every field error | `ERROR` |
//! | storage failure, with the error detail | `ERROR` |
//! | product created | `INFO` |
//! | delete processed, with the removed count | `DEBUG` |
//!
//! With `RUST_LOG=info` a rejected and an accepted create look like:
//!
//! ```text
//! ERROR create_product{user_id="user_1"}: Validation failed errors=name: Name is required; price: Price must be greater than 0
//! INFO create_product{user_id="user_1"}: Created product_id=product_1 size=1 entity_type="Product"
//! INFO create_product{user_id="user_1"}: Product created product_id=product_1
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
