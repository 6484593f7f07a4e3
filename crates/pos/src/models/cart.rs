//! Transient shopping cart assembled before checkout.

use tillpoint_core::{Money, ProductId};

use crate::error::{PosError, Result};
use crate::models::product::Product;

/// One line of a cart: a product at the price it had when added.
///
/// Never persisted on its own; it exists only between "add to cart" and
/// checkout (or clearing the cart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A transient, unsaved collection of line items being assembled for one
/// checkout.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart at its current catalog price.
    ///
    /// Stock is checked here so the cashier hears about a shortfall
    /// immediately; checkout re-validates against the catalog anyway, since
    /// stock may move between the two moments.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Validation` if `quantity` is zero, or
    /// `PosError::InsufficientStock` if the product has fewer than
    /// `quantity` on hand.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(PosError::Validation(
                "quantity must be positive".to_owned(),
            ));
        }
        if quantity > product.stock_quantity {
            return Err(PosError::InsufficientStock {
                product: product.name.clone(),
                requested: quantity,
                available: product.stock_quantity,
            });
        }
        self.lines.push(CartLineItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price: product.unit_price,
            line_total: product.unit_price.times(quantity),
        });
        Ok(())
    }

    /// Append a line that has already been validated against the catalog
    /// (list materialization checks stock before building the line).
    pub(crate) fn push_validated(&mut self, line: CartLineItem) {
        self.lines.push(line);
    }

    /// Remove a line by position.
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<CartLineItem> {
        if index >= self.lines.len() {
            return Err(PosError::NotFound(format!("cart line {index}")));
        }
        Ok(self.lines.remove(index))
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines currently in the cart, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the line totals.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.line_total).sum()
    }
}
