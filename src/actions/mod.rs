//! # Product Actions
//!
//! Server-side mutation handlers for a user's inventory. Every handler runs the same
//! pipeline before anything reaches the store:
//!
//! 1. **Identity**: an absent caller is refused with [`ActionError::Unauthenticated`].
//! 2. **Validation**: form input goes through [`ProductSchema`].
//! 3. **Ownership scoping**: writes carry the caller's id, deletes are filtered by it.
//!
//! ```rust
//! use inventory_actions::actions::{ProductActions, Redirect};
//! use inventory_actions::model::{FormData, User};
//! use inventory_actions::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!     let actions = ProductActions::new(client, "/inventory");
//!
//!     let user = User::new("user_1");
//!     let form = FormData::new()
//!         .with("name", "Widget")
//!         .with("price", "9.99")
//!         .with("quantity", "5");
//!
//!     let redirect = actions.create_product(Some(&user), &form).await?;
//!     assert_eq!(redirect, Redirect::to("/inventory"));
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::{FormData, User};
use crate::schema::ProductSchema;
use tracing::{debug, error, info, instrument, warn};

/// Instruction to navigate the caller elsewhere. Returning one ends the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Create and delete handlers for products, bound to a product store.
#[derive(Clone)]
pub struct ProductActions {
    products: ProductClient,
    listing_path: String,
}

impl ProductActions {
    pub fn new(products: ProductClient, listing_path: impl Into<String>) -> Self {
        Self {
            products,
            listing_path: listing_path.into(),
        }
    }

    /// Where a successful create sends the caller.
    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    /// Validates `form` and stores it as a new product owned by `identity`.
    ///
    /// On success the caller is redirected to the inventory listing. Storage errors
    /// are logged and returned unchanged.
    #[instrument(skip_all, fields(user_id = identity.map(|u| u.id.as_str())))]
    pub async fn create_product(
        &self,
        identity: Option<&User>,
        form: &FormData,
    ) -> Result<Redirect, ActionError> {
        let user = identity.ok_or_else(|| {
            warn!("Rejected create from unauthenticated caller");
            ActionError::Unauthenticated
        })?;

        let draft = ProductSchema::safe_parse(form).map_err(|errors| {
            error!(errors = %errors, "Validation failed");
            ActionError::ValidationFailed
        })?;

        let params = draft.owned_by(user.id.clone());
        let product_id = self.products.create_product(params).await.map_err(|e| {
            error!(error = %e, "Failed to create product");
            ActionError::Store(e)
        })?;

        info!(product_id = %product_id, "Product created");
        Ok(Redirect::to(self.listing_path.as_str()))
    }

    /// Deletes the product named by the form's `id` field, if `identity` owns it.
    ///
    /// A missing `id` is treated as `""`. Unknown or foreign ids match nothing and
    /// still succeed.
    #[instrument(skip_all, fields(user_id = identity.map(|u| u.id.as_str())))]
    pub async fn delete_product(
        &self,
        identity: Option<&User>,
        form: &FormData,
    ) -> Result<(), ActionError> {
        let user = identity.ok_or_else(|| {
            warn!("Rejected delete from unauthenticated caller");
            ActionError::Unauthenticated
        })?;

        let id = form.get("id").unwrap_or_default();
        let removed = self.products.delete_owned(id, &user.id).await.map_err(|e| {
            error!(error = %e, product_id = id, "Failed to delete product");
            ActionError::Store(e)
        })?;

        debug!(product_id = id, removed, "Delete processed");
        Ok(())
    }
}
