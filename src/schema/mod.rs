//! # Product Schema
//!
//! Turns a raw [`FormData`] submission into a [`ProductDraft`] or a list of field errors.
//!
//! Validation runs in two steps:
//!
//! 1. [`RawProductInput::from_form`] picks the fields out of the form and applies the
//!    submission normalizations: an empty `sku` becomes absent, and an empty
//!    `lowStockAt` becomes an explicit null ([`RawLowStock::Null`]), which is how a
//!    cleared field is told apart from one that was never sent.
//! 2. [`ProductSchema::validate`] coerces and checks every field, collecting all
//!    violations rather than stopping at the first.
//!
//! | field | coercion | rule | message |
//! |---|---|---|---|
//! | `name` | none | length ≥ 1 | "Name is required" |
//! | `price` | text → number | ≥ 0 | "Price must be greater than 0" |
//! | `quantity` | text → integer | ≥ 0 | "Quantity must be non-negative" |
//! | `sku` | none | optional | - |
//! | `lowStockAt` | text → integer, or null | ≥ 0 | "Low stock threshold must be a non-negative integer" |
//!
//! Text that is not a finite number (including empty text) never coerces to zero; it is
//! reported as an error.

pub mod error;

pub use error::*;

use crate::model::{FormData, LowStockAt, ProductDraft};

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NEGATIVE: &str = "Price must be greater than 0";
pub const QUANTITY_NOT_A_NUMBER: &str = "Quantity must be a number";
pub const QUANTITY_NOT_AN_INTEGER: &str = "Quantity must be an integer";
pub const QUANTITY_NEGATIVE: &str = "Quantity must be non-negative";
pub const QUANTITY_TOO_LARGE: &str = "Quantity is too large";
pub const LOW_STOCK_INVALID: &str = "Low stock threshold must be a non-negative integer";

/// The `lowStockAt` field before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLowStock<'a> {
    Missing,
    Null,
    Text(&'a str),
}

/// Product fields as submitted, after the empty-value normalizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawProductInput<'a> {
    pub name: Option<&'a str>,
    pub price: Option<&'a str>,
    pub quantity: Option<&'a str>,
    pub sku: Option<&'a str>,
    pub low_stock_at: RawLowStock<'a>,
}

impl<'a> RawProductInput<'a> {
    pub fn from_form(form: &'a FormData) -> Self {
        let low_stock_at = match form.get(ProductField::LowStockAt.key()) {
            None => RawLowStock::Missing,
            Some("") => RawLowStock::Null,
            Some(text) => RawLowStock::Text(text),
        };

        Self {
            name: form.get(ProductField::Name.key()),
            price: form.get(ProductField::Price.key()),
            quantity: form.get(ProductField::Quantity.key()),
            sku: form.get(ProductField::Sku.key()).filter(|sku| !sku.is_empty()),
            low_stock_at,
        }
    }
}

/// Declarative rule set for product submissions.
pub struct ProductSchema;

impl ProductSchema {
    /// Normalizes and validates a form submission. Never panics.
    pub fn safe_parse(form: &FormData) -> Result<ProductDraft, ValidationErrors> {
        Self::validate(RawProductInput::from_form(form))
    }

    pub fn validate(input: RawProductInput<'_>) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = match input.name {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                errors.push(FieldError::new(ProductField::Name, NAME_REQUIRED));
                None
            }
        };

        let price = match coerce_number(input.price) {
            None => {
                errors.push(FieldError::new(ProductField::Price, PRICE_NOT_A_NUMBER));
                None
            }
            Some(price) if price < 0.0 => {
                errors.push(FieldError::new(ProductField::Price, PRICE_NEGATIVE));
                None
            }
            Some(price) => Some(price),
        };

        let quantity = coerce_quantity(input.quantity)
            .map_err(|message| errors.push(FieldError::new(ProductField::Quantity, message)))
            .ok();

        let low_stock_at = match input.low_stock_at {
            RawLowStock::Missing => Some(LowStockAt::Unset),
            RawLowStock::Null => Some(LowStockAt::Cleared),
            RawLowStock::Text(text) => match coerce_non_negative_integer(Some(text)) {
                Ok(threshold) => Some(LowStockAt::At(threshold)),
                Err(_) => {
                    errors.push(FieldError::new(ProductField::LowStockAt, LOW_STOCK_INVALID));
                    None
                }
            },
        };

        match (name, price, quantity, low_stock_at) {
            (Some(name), Some(price), Some(quantity), Some(low_stock_at)) if errors.is_empty() => {
                Ok(ProductDraft {
                    name,
                    price,
                    quantity,
                    sku: input.sku.map(str::to_string),
                    low_stock_at,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Why a text value failed to become a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerRejection {
    NotANumber,
    NotAnInteger,
    Negative,
    TooLarge,
}

/// Text → finite number. Surrounding whitespace is ignored; empty text is not a number.
fn coerce_number(text: Option<&str>) -> Option<f64> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn coerce_non_negative_integer(text: Option<&str>) -> Result<u32, IntegerRejection> {
    let n = coerce_number(text).ok_or(IntegerRejection::NotANumber)?;
    if n.fract() != 0.0 {
        return Err(IntegerRejection::NotAnInteger);
    }
    if n < 0.0 {
        return Err(IntegerRejection::Negative);
    }
    if n > f64::from(u32::MAX) {
        return Err(IntegerRejection::TooLarge);
    }
    Ok(n as u32)
}

fn coerce_quantity(text: Option<&str>) -> Result<u32, &'static str> {
    coerce_non_negative_integer(text).map_err(|rejection| match rejection {
        IntegerRejection::NotANumber => QUANTITY_NOT_A_NUMBER,
        IntegerRejection::NotAnInteger => QUANTITY_NOT_AN_INTEGER,
        IntegerRejection::Negative => QUANTITY_NEGATIVE,
        IntegerRejection::TooLarge => QUANTITY_TOO_LARGE,
    })
}
