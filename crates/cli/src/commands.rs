//! Cart subcommand implementations.
//!
//! Each command restores the file-backed cart, applies its mutation, and
//! prints the resulting snapshot. Persistence happens inside the store.

use rust_decimal::Decimal;

use copper_kettle_cart::CartStore;
use copper_kettle_core::{Product, ProductId};

/// Print the current cart snapshot as JSON.
#[allow(clippy::print_stdout)]
pub fn show(store: &CartStore) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = store.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Add `quantity` of a product to the cart.
pub fn add(
    store: &mut CartStore,
    id: &str,
    title: &str,
    price: Decimal,
    image_url: &str,
    stock: i64,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        price,
        image_url: image_url.to_owned(),
        stock,
    };
    store.add_to_cart(&product, quantity);
    show(store)
}

/// Remove a product from the cart.
pub fn remove(store: &mut CartStore, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    store.remove_from_cart(&ProductId::new(id));
    show(store)
}

/// Replace a product's quantity.
pub fn update(
    store: &mut CartStore,
    id: &str,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    store.update_quantity(&ProductId::new(id), quantity);
    show(store)
}

/// Remove every line item.
pub fn clear(store: &mut CartStore) -> Result<(), Box<dyn std::error::Error>> {
    store.clear_cart();
    show(store)
}
