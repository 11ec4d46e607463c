//! # Product Client
//!
//! Provides a high‑level API for the product store.
//! It wraps a `ResourceClient<Product>` and exposes owner-scoped operations.
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, UserId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_store::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Entity errors raised by the store are unwrapped back into the `ProductError`
    /// they started as.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Deletes the product with textual id `id` if, and only if, `user_id` owns it.
    ///
    /// Returns the number of rows removed; `0` when the id is unknown or owned by
    /// someone else.
    #[instrument(skip(self))]
    pub async fn delete_owned(&self, id: &str, user_id: &UserId) -> Result<usize, ProductError> {
        debug!("Sending request");
        self.inner
            .delete_many(ProductFilter::owned(id, user_id.clone()))
            .await
            .map_err(Self::map_error)
    }

    /// Every product owned by `user_id`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_owned(&self, user_id: &UserId) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.find_many(ProductFilter::owned_by(user_id.clone())).await
    }
}
