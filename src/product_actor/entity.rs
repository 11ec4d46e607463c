//! ActorEntity trait implementation for the Product domain type.
//!
//! This is the storage side of a product: the constraints the store itself enforces
//! and how a [`ProductFilter`] selects rows. Field validation happens earlier, in
//! [`crate::schema`]; the checks here only catch payloads that bypassed it.

use crate::model::{Product, ProductCreate, ProductFilter, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_store::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    /// Builds the stored row, rejecting ownerless or out-of-range payloads.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.user_id.is_empty() {
            return Err(ProductError::MissingOwner);
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::ConstraintViolation(format!(
                "price {} is not a non-negative number",
                params.price
            )));
        }

        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            sku: params.sku,
            low_stock_at: params.low_stock_at.threshold(),
            user_id: params.user_id,
        })
    }

    /// Ids are compared in their textual form, the way forms submit them.
    fn matches(&self, filter: &ProductFilter) -> bool {
        let id_matches = filter
            .id
            .as_deref()
            .map_or(true, |id| self.id.to_string() == id);
        let owner_matches = filter
            .user_id
            .as_ref()
            .map_or(true, |user_id| *user_id == self.user_id);
        id_matches && owner_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LowStockAt, UserId};

    fn create(user_id: &str) -> ProductCreate {
        ProductCreate {
            name: "Widget".to_string(),
            price: 4.5,
            quantity: 12,
            sku: Some("W-1".to_string()),
            low_stock_at: LowStockAt::Cleared,
            user_id: UserId::from(user_id),
        }
    }

    #[test]
    fn test_create_collapses_low_stock_states() {
        let product = Product::from_create_params(ProductId(3), create("user_a")).unwrap();
        assert_eq!(product.id.to_string(), "product_3");
        assert_eq!(product.low_stock_at, None);
        assert_eq!(product.user_id, UserId::from("user_a"));
    }

    #[test]
    fn test_create_without_owner_is_rejected() {
        let result = Product::from_create_params(ProductId(1), create(""));
        assert_eq!(result.unwrap_err(), ProductError::MissingOwner);
    }

    #[test]
    fn test_filter_requires_both_id_and_owner() {
        let product = Product::from_create_params(ProductId(7), create("user_a")).unwrap();

        assert!(product.matches(&ProductFilter::owned("product_7", UserId::from("user_a"))));
        assert!(!product.matches(&ProductFilter::owned("product_7", UserId::from("user_b"))));
        assert!(!product.matches(&ProductFilter::owned("product_8", UserId::from("user_a"))));
        assert!(!product.matches(&ProductFilter::owned("", UserId::from("user_a"))));
        assert!(product.matches(&ProductFilter::owned_by(UserId::from("user_a"))));
        assert!(product.matches(&ProductFilter::default()));
    }
}
