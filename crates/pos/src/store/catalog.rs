//! Product catalog repository.

use std::path::{Path, PathBuf};

use tracing::debug;

use tillpoint_core::ProductId;

use super::{Counters, StoreError, read_rows, recover_seq, write_rows};
use crate::config::PosConfig;
use crate::error::{PosError, Result};
use crate::models::product::{NewProduct, Product};

/// The product inventory table.
///
/// Products are never deleted; stock moves through [`Self::adjust_stock`]
/// and [`Self::set_stock`], and IDs come from an explicit monotonic counter
/// rather than from scanning the table tail.
#[derive(Debug)]
pub struct Catalog {
    table_path: PathBuf,
    counters_path: PathBuf,
    products: Vec<Product>,
    /// Sequence number of the next ID to issue.
    next_seq: u32,
}

impl Catalog {
    /// Open the catalog in the configured data directory, loading any
    /// existing table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the table or counter sidecar exists but
    /// cannot be read.
    pub fn open(config: &PosConfig) -> std::result::Result<Self, StoreError> {
        let table_path = config.inventory_file();
        let counters_path = config.counters_file();
        let products: Vec<Product> = read_rows(&table_path)?;
        let counter = Counters::load(&counters_path)?.unwrap_or_default().product;
        let next_seq = recover_seq(counter, products.iter().map(|p| p.id.seq()));
        debug!(products = products.len(), next_seq, "catalog opened");
        Ok(Self {
            table_path,
            counters_path,
            products,
            next_seq,
        })
    }

    /// Add a product and persist the table.
    ///
    /// The first product ever added gets `P001`; IDs then increase by one.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Validation` if name, category, or supplier is
    /// blank, or `PosError::Persistence` if the save fails (the product is
    /// already in memory in that case).
    pub fn add_product(&mut self, new: NewProduct) -> Result<ProductId> {
        for (field, value) in [
            ("product name", &new.name),
            ("category", &new.category),
            ("supplier", &new.supplier),
        ] {
            if value.trim().is_empty() {
                return Err(PosError::Validation(format!("{field} is required")));
            }
        }

        let id = ProductId::new(self.next_seq);
        self.next_seq += 1;
        self.products.push(Product {
            id,
            name: new.name,
            category: new.category,
            unit_price: new.unit_price,
            stock_quantity: new.initial_stock,
            min_stock_level: new.min_stock_level,
            supplier: new.supplier,
        });
        self.save()?;
        Ok(id)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by exact name. Names are not guaranteed unique;
    /// the first match wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Case-insensitive substring search over product name and ID.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.id.to_string().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Apply a signed stock delta in memory. Does not persist; the caller
    /// decides the durability boundary (checkout saves once after all its
    /// decrements).
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` for an unknown ID, or
    /// `PosError::InsufficientStock` if the delta would take stock below
    /// zero (stock is left untouched).
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> Result<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PosError::NotFound(format!("product {id}")))?;

        let adjusted = i64::from(product.stock_quantity) + delta;
        let Ok(new_quantity) = u32::try_from(adjusted) else {
            return Err(PosError::InsufficientStock {
                product: product.name.clone(),
                requested: delta.unsigned_abs().try_into().unwrap_or(u32::MAX),
                available: product.stock_quantity,
            });
        };
        product.stock_quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Set an absolute stock quantity and persist the table.
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` for an unknown ID, or
    /// `PosError::Persistence` if the save fails.
    pub fn set_stock(&mut self, id: ProductId, new_quantity: u32) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PosError::NotFound(format!("product {id}")))?;
        product.stock_quantity = new_quantity;
        self.save()?;
        Ok(())
    }

    /// Products at or below their reorder threshold.
    #[must_use]
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// Every product, in insertion (ID) order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Rewrite the table and this repository's counter entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either write fails.
    pub fn save(&self) -> std::result::Result<(), StoreError> {
        write_rows(&self.table_path, &self.products)?;
        Counters::update(&self.counters_path, |c| c.product = self.next_seq)?;
        debug!(rows = self.products.len(), "catalog saved");
        Ok(())
    }

    /// Write a copy of the table to an arbitrary path, same format.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    pub fn export_to(&self, path: &Path) -> std::result::Result<(), StoreError> {
        write_rows(path, &self.products)
    }
}
