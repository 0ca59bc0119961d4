//! Read-only cart view handed to consumers.

use copper_kettle_core::CartLineItem;
use serde::Serialize;

/// An owned snapshot of the cart, as exposed to views.
///
/// Totals are computed at snapshot time; the snapshot does not track later
/// mutations. Subscribers receive a fresh one after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub cart_items: Vec<CartLineItem>,
    /// Sum of quantities across all line items.
    pub total_items: i64,
    /// Sum of price times quantity, formatted to two fraction digits.
    pub total_price: String,
    /// Whether the initial restore is still in flight.
    pub loading: bool,
}

impl CartSnapshot {
    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }
}
