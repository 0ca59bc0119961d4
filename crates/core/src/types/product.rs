//! Catalog products and cart line items.
//!
//! These types define the persisted cart format: a flat JSON array of line
//! items with camelCase field names, prices carried as plain JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog product snapshot, as handed to the cart by product views.
///
/// Carries only the fields the cart needs to build a line item. `stock` is
/// the availability level at the time the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Featured image URL.
    pub image_url: String,
    /// Available stock at snapshot time (informational only).
    pub stock: i64,
}

/// A line item in the cart.
///
/// Unique per `product_id`; the product fields are copied from the catalog
/// snapshot at add time and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product ID (unique key within a cart).
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Featured image URL.
    pub image_url: String,
    /// Stock level at add time (informational only).
    pub stock: i64,
    /// Quantity of this product in the cart.
    pub quantity: i64,
}

impl CartLineItem {
    /// Build a line item from a catalog snapshot and a quantity.
    #[must_use]
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            stock: product.stock,
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
