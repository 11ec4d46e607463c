use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Assigned by the store. Its textual form (`product_<n>`) is what forms submit back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in a user's inventory.
///
/// # Resource Store
/// This struct implements the [`ActorEntity`](resource_store::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](resource_store::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Row selection ([`ProductFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub sku: Option<String>,
    pub low_stock_at: Option<u32>,
    pub user_id: UserId,
}

impl Product {
    /// Whether stock has fallen to or below the configured threshold.
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_at
            .is_some_and(|threshold| self.quantity <= threshold)
    }
}

/// Three-state low-stock threshold as submitted by a form.
///
/// `Unset` means the field was not submitted at all, `Cleared` means it was submitted
/// empty (the user cleared it). Both persist as "no threshold".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LowStockAt {
    #[default]
    Unset,
    Cleared,
    At(u32),
}

impl LowStockAt {
    pub fn threshold(self) -> Option<u32> {
        match self {
            LowStockAt::At(n) => Some(n),
            LowStockAt::Unset | LowStockAt::Cleared => None,
        }
    }
}

/// A validated product record, not yet owned by anyone.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub sku: Option<String>,
    pub low_stock_at: LowStockAt,
}

impl ProductDraft {
    /// Attaches the owning identity, producing the store payload.
    pub fn owned_by(self, user_id: UserId) -> ProductCreate {
        ProductCreate {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            sku: self.sku,
            low_stock_at: self.low_stock_at,
            user_id,
        }
    }
}

/// Store payload for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub sku: Option<String>,
    pub low_stock_at: LowStockAt,
    pub user_id: UserId,
}

/// Selects products by textual id and/or owner. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub id: Option<String>,
    pub user_id: Option<UserId>,
}

impl ProductFilter {
    /// Every product owned by `user_id`.
    pub fn owned_by(user_id: UserId) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
        }
    }

    /// The product with textual id `id`, but only if `user_id` owns it.
    pub fn owned(id: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: Some(id.into()),
            user_id: Some(user_id),
        }
    }
}
