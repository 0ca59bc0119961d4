//! Integration tests for Copper Kettle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p copper-kettle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Mutation semantics and derived totals
//! - `cart_persistence` - Restore/persist lifecycle against memory and file storage
//! - `cart_subscriptions` - Change notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;

use rust_decimal::Decimal;

use copper_kettle_cart::{AnonymousAuth, CART_STORAGE_KEY, CartStorage, CartStore, MemoryStorage};
use copper_kettle_core::{Product, ProductId};

/// Shared wiring for cart scenarios: a memory-backed store plus a handle to
/// the storage it writes through.
pub struct TestContext {
    /// Handle onto the same map the store persists into.
    pub storage: MemoryStorage,
    /// The store under test.
    pub store: CartStore,
}

impl TestContext {
    /// A restored, ready-to-use store over empty storage.
    #[must_use]
    pub fn new() -> Self {
        let storage = MemoryStorage::new();
        let store = CartStore::open(Box::new(storage.clone()), Rc::new(AnonymousAuth));
        Self { storage, store }
    }

    /// A store still in the `Loading` state (no restore yet).
    #[must_use]
    pub fn loading() -> Self {
        let storage = MemoryStorage::new();
        let store = CartStore::new(Box::new(storage.clone()), Rc::new(AnonymousAuth));
        Self { storage, store }
    }

    /// A restored store over storage seeded with `raw` under the cart key.
    ///
    /// # Panics
    ///
    /// Panics if the memory backend rejects the seed write (it never does).
    #[must_use]
    pub fn seeded(raw: &str) -> Self {
        let storage = MemoryStorage::new();
        storage
            .set(CART_STORAGE_KEY, raw)
            .expect("memory storage writes cannot fail");
        let store = CartStore::open(Box::new(storage.clone()), Rc::new(AnonymousAuth));
        Self { storage, store }
    }

    /// The raw persisted cart value, if any.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn persisted(&self) -> Option<String> {
        self.storage
            .get(CART_STORAGE_KEY)
            .expect("memory storage reads cannot fail")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A catalog product with a price given in cents.
#[must_use]
pub fn product(id: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        price: Decimal::new(price_cents, 2),
        image_url: format!("https://cdn.example.com/{id}.jpg"),
        stock: 25,
    }
}
