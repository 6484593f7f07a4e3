//! Shopping list entries and materialization skip records.

use serde::{Deserialize, Serialize};

/// One entry of a customer's shopping list.
///
/// References the product by name rather than ID: the list doubles as a
/// wishlist, and a "pencil entry" for something the shop does not stock yet
/// is allowed. Resolution against the catalog happens at materialization
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Product name as the customer wrote it down.
    pub product: String,
    /// Desired quantity, always positive.
    pub quantity: u32,
    /// Free-form note ("ripe ones", "brand X").
    #[serde(default)]
    pub notes: String,
}

/// Why a shopping list entry could not be turned into a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No catalog product carries this name.
    ProductNotFound,
    /// The product exists but has fewer units on hand than requested.
    InsufficientStock {
        /// Quantity currently on hand.
        available: u32,
    },
}

/// A shopping list entry that materialization left out of the cart.
///
/// One unavailable item must not block the rest of the list, so these are
/// collected and reported instead of failing the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    /// Product name from the list entry.
    pub product: String,
    /// Quantity the entry asked for.
    pub requested: u32,
    /// Why the entry was skipped.
    pub reason: SkipReason,
}
