//! Mutation semantics and derived totals.

#![allow(clippy::unwrap_used)]

use copper_kettle_core::ProductId;
use copper_kettle_integration_tests::{TestContext, product};
use rust_decimal::Decimal;

#[test]
fn add_sequences_keep_one_line_per_product() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.add_to_cart(&product("p2", 750), 1);
    ctx.store.add_to_cart(&product("p1", 500), 4);
    ctx.store.add_single(&product("p2", 750));
    ctx.store.add_to_cart(&product("p1", 500), 1);

    let items = ctx.store.items();
    assert_eq!(items.len(), 2);

    // Quantities are the sums of everything passed per product.
    assert_eq!(items[0].product_id, ProductId::new("p1"));
    assert_eq!(items[0].quantity, 7);
    assert_eq!(items[1].product_id, ProductId::new("p2"));
    assert_eq!(items[1].quantity, 2);
}

#[test]
fn lines_keep_insertion_order() {
    let mut ctx = TestContext::new();

    for id in ["p3", "p1", "p2"] {
        ctx.store.add_single(&product(id, 100));
    }

    let order: Vec<&str> = ctx
        .store
        .items()
        .iter()
        .map(|item| item.product_id.as_str())
        .collect();
    assert_eq!(order, ["p3", "p1", "p2"]);
}

#[test]
fn remove_then_add_matches_a_fresh_cart() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 5);
    ctx.store.remove_from_cart(&ProductId::new("p1"));
    ctx.store.add_to_cart(&product("p1", 500), 2);

    // No residual quantity from before the remove.
    assert_eq!(ctx.store.items().len(), 1);
    assert_eq!(ctx.store.items()[0].quantity, 2);
    assert_eq!(ctx.store.total_items(), 2);
}

#[test]
fn remove_of_absent_product_is_a_silent_noop() {
    let mut ctx = TestContext::new();

    ctx.store.add_single(&product("p1", 500));
    ctx.store.remove_from_cart(&ProductId::new("missing"));

    assert_eq!(ctx.store.items().len(), 1);
}

#[test]
fn totals_track_quantities_and_prices() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 999), 2);
    ctx.store.add_to_cart(&product("p2", 1250), 3);

    assert_eq!(ctx.store.total_items(), 5);
    assert_eq!(ctx.store.subtotal(), Decimal::new(5748, 2));
    assert_eq!(ctx.store.total_price(), "57.48");
}

#[test]
fn total_price_is_always_two_fraction_digits() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 4);
    assert_eq!(ctx.store.total_price(), "20.00");
}

#[test]
fn update_quantity_replaces_verbatim() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.update_quantity(&ProductId::new("p1"), 9);

    assert_eq!(ctx.store.items()[0].quantity, 9);
    assert_eq!(ctx.store.total_items(), 9);
}

#[test]
fn update_quantity_of_absent_product_is_a_silent_noop() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.update_quantity(&ProductId::new("missing"), 9);

    assert_eq!(ctx.store.total_items(), 2);
}

// Known edge case: update_quantity applies no lower bound. The UI never
// calls it with values below 1, and the store keeps whatever it is given.
#[test]
fn update_quantity_accepts_zero_verbatim() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.update_quantity(&ProductId::new("p1"), 0);

    assert_eq!(ctx.store.items().len(), 1);
    assert_eq!(ctx.store.items()[0].quantity, 0);
    assert_eq!(ctx.store.total_items(), 0);
    assert_eq!(ctx.store.total_price(), "0.00");
}

#[test]
fn update_quantity_accepts_negative_verbatim() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.update_quantity(&ProductId::new("p1"), -3);

    assert_eq!(ctx.store.items()[0].quantity, -3);
    assert_eq!(ctx.store.total_items(), -3);
    assert_eq!(ctx.store.total_price(), "-15.00");
}

#[test]
fn clear_cart_empties_everything() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 500), 2);
    ctx.store.add_to_cart(&product("p2", 750), 1);
    ctx.store.clear_cart();

    assert_eq!(ctx.store.items().len(), 0);
    assert_eq!(ctx.store.total_items(), 0);
    assert_eq!(ctx.store.total_price(), "0.00");
}

#[test]
fn snapshot_mirrors_store_state() {
    let mut ctx = TestContext::new();

    ctx.store.add_to_cart(&product("p1", 999), 2);
    let snapshot = ctx.store.snapshot();

    assert_eq!(snapshot.cart_items, ctx.store.items());
    assert_eq!(snapshot.total_items, 2);
    assert_eq!(snapshot.total_price, "19.98");
    assert!(!snapshot.loading);
    assert!(!snapshot.is_empty());
}
