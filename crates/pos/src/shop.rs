//! Convenience aggregate over the four stores of one data directory.

use std::fs;

use tracing::info;

use tillpoint_core::{CustomerId, PaymentMethod};

use crate::config::PosConfig;
use crate::error::Result;
use crate::models::cart::Cart;
use crate::models::sale::Receipt;
use crate::services::checkout::CheckoutEngine;
use crate::store::{Catalog, CustomerDirectory, Ledger, ShoppingListStore};

/// Every store of one shop, opened from one data directory.
///
/// The fields are public on purpose: the repositories are the API, and the
/// borrow checker splits them fine (`&shop.catalog` alongside
/// `&mut shop.shopping_lists` is legal). `Shop` itself only adds opening
/// and the checkout shorthand.
#[derive(Debug)]
pub struct Shop {
    pub catalog: Catalog,
    pub ledger: Ledger,
    pub customers: CustomerDirectory,
    pub shopping_lists: ShoppingListStore,
    config: PosConfig,
}

impl Shop {
    /// Open (creating the data directory if needed) every store.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Persistence` if the directory cannot be created
    /// or any dataset exists but cannot be read.
    pub fn open(config: PosConfig) -> Result<Self> {
        fs::create_dir_all(config.data_dir()).map_err(crate::store::StoreError::from)?;
        let shop = Self {
            catalog: Catalog::open(&config)?,
            ledger: Ledger::open(&config)?,
            customers: CustomerDirectory::open(&config)?,
            shopping_lists: ShoppingListStore::open(&config)?,
            config,
        };
        info!(data_dir = %shop.config.data_dir().display(), "shop opened");
        Ok(shop)
    }

    /// Process a sale against this shop's stores.
    ///
    /// # Errors
    ///
    /// See [`CheckoutEngine::checkout`].
    pub fn checkout(
        &mut self,
        cart: &Cart,
        customer_id: CustomerId,
        payment_method: PaymentMethod,
    ) -> Result<Receipt> {
        CheckoutEngine::new(&mut self.catalog, &mut self.ledger, &mut self.customers)
            .checkout(cart, customer_id, payment_method)
    }

    /// The configuration this shop was opened with.
    #[must_use]
    pub const fn config(&self) -> &PosConfig {
        &self.config
    }
}
