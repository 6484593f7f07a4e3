//! Tillpoint POS - single-store point-of-sale and inventory engine.
//!
//! This crate is the core behind a till: a product catalog, an append-only
//! sales ledger, a customer directory with running purchase totals, and
//! per-customer shopping lists that can be bulk-converted into a cart. The
//! checkout engine ties the stores together as one logical unit.
//!
//! # Architecture
//!
//! - [`models`] - Domain records (products, customers, sale lines, carts)
//! - [`store`] - Repository objects, each owning one flat-file dataset
//! - [`services`] - The checkout engine and report aggregation
//! - [`shop`] - Convenience aggregate that opens every store in a data dir
//!
//! Everything is single-threaded and synchronous: operations run to
//! completion or fail, and each repository rewrites its whole file on save.
//! Atomicity at checkout is a logical-unit guarantee (validate everything,
//! then mutate memory, then save the three stores in a fixed sequence), not
//! a crash-safe transaction.
//!
//! # Persistence
//!
//! The data directory holds `inventory.csv`, `sales_records.csv`,
//! `customers.csv`, `shopping_lists.json`, and a `counters.json` sidecar
//! with the next unissued ID sequence numbers. Multi-process access to the
//! same directory is unsupported (last writer wins).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod shop;
pub mod store;
pub mod telemetry;

pub use config::PosConfig;
pub use error::{PosError, Result};
pub use models::{
    Cart, CartLineItem, Customer, NewCustomer, NewProduct, Product, Receipt, SaleLineItem,
    ShoppingListItem, SkipReason, SkippedItem,
};
pub use services::checkout::CheckoutEngine;
pub use shop::Shop;
pub use store::{Catalog, CustomerDirectory, Ledger, ShoppingListStore};
