//! Shopping list store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use tillpoint_core::CustomerId;

use super::StoreError;
use crate::config::PosConfig;
use crate::error::{PosError, Result};
use crate::models::cart::{Cart, CartLineItem};
use crate::models::shopping_list::{ShoppingListItem, SkipReason, SkippedItem};
use crate::store::Catalog;

/// Per-customer named shopping lists, persisted as one JSON document keyed
/// by customer ID.
///
/// Lists live independently of the catalog and ledger: entries reference
/// products by name and only get resolved when the list is materialized
/// into a cart.
#[derive(Debug)]
pub struct ShoppingListStore {
    path: PathBuf,
    lists: BTreeMap<CustomerId, Vec<ShoppingListItem>>,
}

impl ShoppingListStore {
    /// Open the store in the configured data directory, loading any
    /// existing document.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the document exists but cannot be read.
    pub fn open(config: &PosConfig) -> std::result::Result<Self, StoreError> {
        let path = config.shopping_lists_file();
        let lists = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            BTreeMap::new()
        };
        debug!(customers = lists.len(), "shopping lists opened");
        Ok(Self { path, lists })
    }

    /// Append an entry to a customer's list and persist the document.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Validation` if the product name is blank or the
    /// quantity is zero, or `PosError::Persistence` if the save fails.
    pub fn add_item(
        &mut self,
        customer_id: CustomerId,
        product_name: &str,
        quantity: u32,
        notes: &str,
    ) -> Result<()> {
        if product_name.trim().is_empty() {
            return Err(PosError::Validation("product name is required".to_owned()));
        }
        if quantity == 0 {
            return Err(PosError::Validation(
                "quantity must be positive".to_owned(),
            ));
        }
        self.lists
            .entry(customer_id)
            .or_default()
            .push(ShoppingListItem {
                product: product_name.to_owned(),
                quantity,
                notes: notes.to_owned(),
            });
        self.save()?;
        Ok(())
    }

    /// Remove an entry by position and persist the document.
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` if the customer has no list or the
    /// index is out of range, or `PosError::Persistence` if the save fails.
    pub fn remove_item(&mut self, customer_id: CustomerId, index: usize) -> Result<ShoppingListItem> {
        let list = self
            .lists
            .get_mut(&customer_id)
            .filter(|list| index < list.len())
            .ok_or_else(|| {
                PosError::NotFound(format!("shopping list entry {index} for {customer_id}"))
            })?;
        let removed = list.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Empty a customer's list. Idempotent: clearing an absent list is
    /// fine.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Persistence` if the save fails.
    pub fn clear(&mut self, customer_id: CustomerId) -> Result<()> {
        self.lists.remove(&customer_id);
        self.save()?;
        Ok(())
    }

    /// A customer's list entries, in the order they were added.
    #[must_use]
    pub fn items(&self, customer_id: CustomerId) -> &[ShoppingListItem] {
        self.lists.get(&customer_id).map_or(&[], Vec::as_slice)
    }

    /// Customers whose list currently has at least one entry.
    #[must_use]
    pub fn active_list_count(&self) -> usize {
        self.lists.values().filter(|list| !list.is_empty()).count()
    }

    /// Turn a customer's list into a cart at current catalog prices.
    ///
    /// Partial success by design: an entry whose product name is not in the
    /// catalog, or whose requested quantity exceeds stock, is reported as
    /// skipped instead of blocking the rest of the list. The list itself is
    /// left untouched.
    #[must_use]
    pub fn materialize_to_cart(
        &self,
        customer_id: CustomerId,
        catalog: &Catalog,
    ) -> (Cart, Vec<SkippedItem>) {
        let mut cart = Cart::new();
        let mut skipped = Vec::new();

        for item in self.items(customer_id) {
            match catalog.find_by_name(&item.product) {
                None => skipped.push(SkippedItem {
                    product: item.product.clone(),
                    requested: item.quantity,
                    reason: SkipReason::ProductNotFound,
                }),
                Some(product) if product.stock_quantity < item.quantity => {
                    skipped.push(SkippedItem {
                        product: item.product.clone(),
                        requested: item.quantity,
                        reason: SkipReason::InsufficientStock {
                            available: product.stock_quantity,
                        },
                    });
                }
                Some(product) => cart.push_validated(CartLineItem {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    quantity: item.quantity,
                    unit_price: product.unit_price,
                    line_total: product.unit_price.times(item.quantity),
                }),
            }
        }

        (cart, skipped)
    }

    /// Rewrite the document.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    pub fn save(&self) -> std::result::Result<(), StoreError> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.lists)?)?;
        debug!(customers = self.lists.len(), "shopping lists saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use tillpoint_core::Money;

    use super::*;
    use crate::models::product::NewProduct;

    fn open_store(dir: &Path) -> ShoppingListStore {
        ShoppingListStore::open(&PosConfig::new(dir)).unwrap()
    }

    fn stocked_catalog(dir: &Path) -> Catalog {
        let mut catalog = Catalog::open(&PosConfig::new(dir)).unwrap();
        catalog
            .add_product(NewProduct {
                name: "Rice (1kg)".to_owned(),
                category: "Grains".to_owned(),
                unit_price: Money::parse("80.00").unwrap(),
                initial_stock: 50,
                min_stock_level: 10,
                supplier: "Supplier A".to_owned(),
            })
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_and_remove_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(dir.path());
        let customer = CustomerId::new(1);

        store.add_item(customer, "Rice (1kg)", 2, "").unwrap();
        store.add_item(customer, "Bread", 1, "whole wheat").unwrap();
        assert_eq!(store.items(customer).len(), 2);

        let removed = store.remove_item(customer, 0).unwrap();
        assert_eq!(removed.product, "Rice (1kg)");
        assert_eq!(store.items(customer).len(), 1);

        assert!(matches!(
            store.remove_item(customer, 5),
            Err(PosError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_item_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(dir.path());
        let customer = CustomerId::new(1);

        assert!(matches!(
            store.add_item(customer, "", 1, ""),
            Err(PosError::Validation(_))
        ));
        assert!(matches!(
            store.add_item(customer, "Rice (1kg)", 0, ""),
            Err(PosError::Validation(_))
        ));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(dir.path());
        let customer = CustomerId::new(1);

        store.add_item(customer, "Rice (1kg)", 2, "").unwrap();
        store.clear(customer).unwrap();
        assert!(store.items(customer).is_empty());

        // Clearing an already-empty (or never-created) list is not an error.
        store.clear(customer).unwrap();
        store.clear(CustomerId::new(9)).unwrap();
    }

    #[test]
    fn test_materialize_partial_success() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = stocked_catalog(dir.path());
        let mut store = open_store(dir.path());
        let customer = CustomerId::new(1);

        store.add_item(customer, "Rice (1kg)", 3, "").unwrap();
        store.add_item(customer, "Dragon Fruit", 1, "pencil entry").unwrap();
        store.add_item(customer, "Rice (1kg)", 999, "").unwrap();

        let (cart, skipped) = store.materialize_to_cart(customer, &catalog);

        assert_eq!(cart.len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.line_total, Money::parse("240.00").unwrap());

        assert_eq!(skipped.len(), 2);
        assert!(matches!(
            skipped.first().unwrap().reason,
            SkipReason::ProductNotFound
        ));
        assert!(matches!(
            skipped.get(1).unwrap().reason,
            SkipReason::InsufficientStock { available: 50 }
        ));

        // Materialization does not consume the list.
        assert_eq!(store.items(customer).len(), 3);
    }

    #[test]
    fn test_roundtrip_preserves_order_and_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(dir.path());
        store.add_item(CustomerId::new(2), "Bread", 1, "").unwrap();
        store.add_item(CustomerId::new(1), "Milk (1L)", 2, "cold").unwrap();
        store.add_item(CustomerId::new(1), "Eggs (12pcs)", 1, "").unwrap();

        let reloaded = open_store(dir.path());
        assert_eq!(reloaded.items(CustomerId::new(1)), store.items(CustomerId::new(1)));
        assert_eq!(reloaded.items(CustomerId::new(2)), store.items(CustomerId::new(2)));
    }

    #[test]
    fn test_document_keys_are_display_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(dir.path());
        store.add_item(CustomerId::new(1), "Bread", 1, "").unwrap();

        let raw = std::fs::read_to_string(dir.path().join("shopping_lists.json")).unwrap();
        assert!(raw.contains("\"C001\""));
        assert!(raw.contains("\"product\": \"Bread\""));
    }
}
