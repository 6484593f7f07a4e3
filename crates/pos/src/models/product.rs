//! Catalog product record.

use serde::{Deserialize, Serialize};

use tillpoint_core::{Money, ProductId};

/// A product in the catalog.
///
/// Serde field renames match the persisted table's column headers exactly,
/// so the CSV on disk stays readable by the spreadsheet-minded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product_ID")]
    pub id: ProductId,
    #[serde(rename = "Product_Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Unit_Price")]
    pub unit_price: Money,
    #[serde(rename = "Stock_Quantity")]
    pub stock_quantity: u32,
    #[serde(rename = "Min_Stock_Level")]
    pub min_stock_level: u32,
    #[serde(rename = "Supplier")]
    pub supplier: String,
}

impl Product {
    /// Whether the quantity on hand has reached the reorder threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.min_stock_level
    }
}

/// Input for [`Catalog::add_product`](crate::store::Catalog::add_product).
///
/// The ID is assigned by the catalog, never by the caller.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub initial_stock: u32,
    pub min_stock_level: u32,
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32, min: u32) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Rice (1kg)".to_owned(),
            category: "Grains".to_owned(),
            unit_price: Money::ZERO,
            stock_quantity: stock,
            min_stock_level: min,
            supplier: "Supplier A".to_owned(),
        }
    }

    #[test]
    fn test_low_stock_at_boundary() {
        // At the threshold counts as low; one above does not.
        assert!(product(10, 10).is_low_stock());
        assert!(!product(11, 10).is_low_stock());
        assert!(product(0, 0).is_low_stock());
    }
}
