//! Sample catalog seeding for a fresh shop.

use tracing::info;

use tillpoint_core::{Money, ProductId};

use crate::error::Result;
use crate::models::product::NewProduct;
use crate::store::Catalog;

/// The starter grocery assortment: name, category, unit price, stock,
/// reorder threshold, supplier.
const SAMPLE_PRODUCTS: &[(&str, &str, &str, u32, u32, &str)] = &[
    ("Rice (1kg)", "Grains", "80.00", 50, 10, "Supplier A"),
    ("Wheat Flour (1kg)", "Grains", "45.00", 30, 10, "Supplier A"),
    ("Sugar (1kg)", "Pantry", "42.00", 25, 5, "Supplier B"),
    ("Cooking Oil (1L)", "Pantry", "120.00", 20, 5, "Supplier C"),
    ("Milk (1L)", "Dairy", "60.00", 15, 5, "Supplier D"),
    ("Bread", "Bakery", "25.00", 40, 10, "Supplier E"),
    ("Eggs (12pcs)", "Dairy", "180.00", 30, 10, "Supplier D"),
    ("Tomatoes (1kg)", "Vegetables", "40.00", 50, 10, "Supplier F"),
    ("Onions (1kg)", "Vegetables", "30.00", 40, 10, "Supplier F"),
    ("Potatoes (1kg)", "Vegetables", "35.00", 60, 15, "Supplier F"),
];

/// The sample products as catalog inputs.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    SAMPLE_PRODUCTS
        .iter()
        .map(
            |&(name, category, price, stock, min_stock, supplier)| NewProduct {
                name: name.to_owned(),
                category: category.to_owned(),
                unit_price: Money::parse(price).unwrap_or(Money::ZERO),
                initial_stock: stock,
                min_stock_level: min_stock,
                supplier: supplier.to_owned(),
            },
        )
        .collect()
}

/// Seed the sample assortment into an empty catalog; a catalog that
/// already has products is left alone.
///
/// Returns the IDs added (`P001..P010` on a fresh catalog), or an empty
/// vector if nothing was seeded.
///
/// # Errors
///
/// Returns `PosError::Persistence` if a save fails mid-seed.
pub fn seed_if_empty(catalog: &mut Catalog) -> Result<Vec<ProductId>> {
    if !catalog.is_empty() {
        return Ok(Vec::new());
    }
    let mut ids = Vec::new();
    for product in sample_products() {
        ids.push(catalog.add_product(product)?);
    }
    info!(products = ids.len(), "seeded sample catalog");
    Ok(ids)
}
