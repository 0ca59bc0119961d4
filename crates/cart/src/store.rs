//! The cart state holder.
//!
//! Owns the line-item list, mirrors it to the storage collaborator after
//! every mutation, and notifies subscribers with a fresh snapshot. All
//! operations are synchronous and run on the caller's thread.

use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use copper_kettle_core::{CartLineItem, Product, ProductId, format_amount};

use crate::auth::AuthContext;
use crate::snapshot::CartSnapshot;
use crate::storage::{CART_STORAGE_KEY, CartStorage};
use crate::subscription::{Subscribers, SubscriptionId};

/// Cart lifecycle.
///
/// The store starts in `Loading` and moves to `Ready` once the initial
/// restore attempt completes. Persistence is suppressed while `Loading` so
/// a not-yet-restored cart can never overwrite stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Initial restore has not completed yet.
    Loading,
    /// Normal operation; mutations are persisted.
    Ready,
}

/// The cart state holder.
///
/// Construct one per application instance and pass it by reference to any
/// component needing cart access. Mutations persist the full list and then
/// notify subscribers; lookup misses on remove/update are silent no-ops.
pub struct CartStore {
    items: Vec<CartLineItem>,
    lifecycle: Lifecycle,
    storage: Box<dyn CartStorage>,
    auth: Rc<dyn AuthContext>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create a store in the `Loading` state with an empty cart.
    ///
    /// Call [`CartStore::restore`] once at startup to load persisted state,
    /// or use [`CartStore::open`] which does both.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>, auth: Rc<dyn AuthContext>) -> Self {
        Self {
            items: Vec::new(),
            lifecycle: Lifecycle::Loading,
            storage,
            auth,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a store and immediately restore persisted state.
    #[must_use]
    pub fn open(storage: Box<dyn CartStorage>, auth: Rc<dyn AuthContext>) -> Self {
        let mut store = Self::new(storage, auth);
        store.restore();
        store
    }

    /// Load the persisted cart, then enter the `Ready` state.
    ///
    /// An absent key leaves the cart empty. A value that fails to parse is
    /// logged and deleted from storage; the cart starts empty. Storage read
    /// failures are treated like an absent key. This path never fails the
    /// caller.
    pub fn restore(&mut self) {
        let customer = self.auth.current_customer();
        debug!(customer = ?customer, "restoring cart");

        match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(items) => self.items = items,
                Err(error) => {
                    warn!(%error, "discarding corrupted cart data");
                    if let Err(error) = self.storage.delete(CART_STORAGE_KEY) {
                        warn!(%error, "failed to delete corrupted cart data");
                    }
                }
            },
            Ok(None) => {}
            Err(error) => warn!(%error, "cart storage unreadable, starting empty"),
        }

        self.lifecycle = Lifecycle::Ready;
        self.notify();
    }

    /// Serialize the cart and write it to storage.
    ///
    /// Suppressed while `Loading`; write failures are logged and swallowed,
    /// leaving the in-memory cart authoritative for the session.
    fn persist(&self) {
        if self.lifecycle == Lifecycle::Loading {
            debug!("cart not restored yet, skipping persist");
            return;
        }

        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(error) = self.storage.set(CART_STORAGE_KEY, &raw) {
                    warn!(%error, "failed to persist cart");
                }
            }
            Err(error) => warn!(%error, "failed to serialize cart"),
        }
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// If the product is already in the cart its quantity is increased by
    /// `quantity`; otherwise a new line item is appended. Quantity is taken
    /// verbatim; callers enforce positivity.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartLineItem::from_product(product, quantity)),
        }
        self.after_mutation();
    }

    /// Add a single unit of `product` to the cart.
    pub fn add_single(&mut self, product: &Product) {
        self.add_to_cart(product, 1);
    }

    /// Remove the line item for `product_id`. No-op when absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.product_id != *product_id);
        self.after_mutation();
    }

    /// Replace the quantity of the line item for `product_id` verbatim.
    /// No-op when absent.
    ///
    /// No lower bound is applied; a zero or negative quantity is stored
    /// as-is and flows into the totals.
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: i64) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == *product_id)
        {
            item.quantity = new_quantity;
        }
        self.after_mutation();
    }

    /// Remove every line item.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.after_mutation();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the initial restore is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Loading)
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Sum of quantities across all line items. Recomputed on every call.
    #[must_use]
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price times quantity across all line items, as a decimal.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// [`CartStore::subtotal`] formatted to exactly two fraction digits.
    #[must_use]
    pub fn total_price(&self) -> String {
        format_amount(self.subtotal())
    }

    /// Owned read-only view of the current cart state.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            cart_items: self.items.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
            loading: self.is_loading(),
        }
    }

    /// Register a listener invoked with a fresh snapshot after restore and
    /// after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartSnapshot) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn after_mutation(&mut self) {
        self.persist();
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.notify(&snapshot);
    }
}
