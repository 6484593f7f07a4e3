//! The checkout engine.
//!
//! Converts a cart into a persisted sale as one logical unit: re-validate
//! everything against current state, then mutate all three stores in
//! memory, then save them in a fixed sequence. Validation failures leave
//! every store untouched and the cart intact; a failed save leaves memory
//! mutated and disk stale, which the caller must surface and retry.

use std::collections::HashMap;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::{info, instrument};

use tillpoint_core::{CustomerId, Money, PaymentMethod, ProductId};

use crate::error::{PosError, Result};
use crate::models::cart::Cart;
use crate::models::sale::{Receipt, SaleLineItem};
use crate::store::{Catalog, CustomerDirectory, Ledger};

/// A cart line after re-validation, with name and price re-snapshotted from
/// the catalog at sale time. Using the catalog's current price (not the
/// cart's possibly stale one) keeps the ledger totals and the customer's
/// credited amount in agreement.
struct ValidatedLine {
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    unit_price: Money,
}

/// Orchestrates a checkout across the catalog, ledger, and customer
/// directory. Holds no state of its own; borrow it fresh per sale.
pub struct CheckoutEngine<'a> {
    catalog: &'a mut Catalog,
    ledger: &'a mut Ledger,
    customers: &'a mut CustomerDirectory,
}

impl<'a> CheckoutEngine<'a> {
    /// Borrow the three stores a checkout touches.
    pub fn new(
        catalog: &'a mut Catalog,
        ledger: &'a mut Ledger,
        customers: &'a mut CustomerDirectory,
    ) -> Self {
        Self {
            catalog,
            ledger,
            customers,
        }
    }

    /// Process a sale.
    ///
    /// All-or-nothing from the caller's perspective: if any line fails
    /// validation, no store is mutated and the cart is left intact for
    /// correction. On success the ledger gains one row per cart line (all
    /// sharing a freshly issued sale ID), stock is decremented, the
    /// customer's running total is credited with the sale amount, and all
    /// three stores are persisted.
    ///
    /// # Errors
    ///
    /// - `PosError::EmptyCart` if the cart has no lines
    /// - `PosError::NotFound` if the customer (or a line's product) no
    ///   longer exists
    /// - `PosError::InsufficientStock` if any line asks for more than the
    ///   current stock on hand
    /// - `PosError::Persistence` if a save fails after the in-memory
    ///   mutations
    #[instrument(skip_all, fields(customer = %customer_id, lines = cart.len()))]
    pub fn checkout(
        &mut self,
        cart: &Cart,
        customer_id: CustomerId,
        payment_method: PaymentMethod,
    ) -> Result<Receipt> {
        if cart.is_empty() {
            return Err(PosError::EmptyCart);
        }
        let customer_name = self
            .customers
            .find_by_id(customer_id)
            .ok_or_else(|| PosError::NotFound(format!("customer {customer_id}")))?
            .name
            .clone();

        // Validation pass. Stock may have moved since lines were added to
        // the cart, so every line is checked against the catalog as it is
        // now. A product may appear on more than one line, so each check
        // runs against the stock remaining after the earlier lines, not the
        // shelf quantity in isolation. Nothing is mutated until this pass
        // completes, which guarantees the mutation loop below cannot fail
        // on stock.
        let mut remaining: HashMap<ProductId, u32> = HashMap::new();
        let mut validated = Vec::with_capacity(cart.len());
        for line in cart.lines() {
            let product = self
                .catalog
                .find_by_id(line.product_id)
                .ok_or_else(|| PosError::NotFound(format!("product {}", line.product_id)))?;
            let available = remaining
                .entry(product.id)
                .or_insert(product.stock_quantity);
            if line.quantity > *available {
                return Err(PosError::InsufficientStock {
                    product: product.name.clone(),
                    requested: line.quantity,
                    available: *available,
                });
            }
            *available -= line.quantity;
            validated.push(ValidatedLine {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity: line.quantity,
                unit_price: product.unit_price,
            });
        }

        // Mutation pass: all in memory, no saves until every store is
        // updated.
        let sale_id = self.ledger.allocate_sale_id();
        let (date, time) = sale_timestamp();
        let mut line_items = Vec::with_capacity(validated.len());
        let mut total_amount = Money::ZERO;

        for line in validated {
            self.catalog
                .adjust_stock(line.product_id, -i64::from(line.quantity))?;
            let line_total = line.unit_price.times(line.quantity);
            total_amount += line_total;
            let item = SaleLineItem {
                sale_id,
                date,
                time,
                customer_id,
                customer_name: customer_name.clone(),
                product_id: line.product_id,
                product_name: line.product_name,
                quantity: line.quantity,
                unit_price: line.unit_price,
                total_amount: line_total,
                payment_method,
            };
            self.ledger.append(item.clone());
            line_items.push(item);
        }

        self.customers.credit_purchase(customer_id, total_amount)?;

        // Durability boundary: fixed save sequence.
        self.catalog.save()?;
        self.ledger.save()?;
        self.customers.save()?;

        info!(sale = %sale_id, total = %total_amount, "sale processed");
        Ok(Receipt {
            sale_id,
            total_amount,
            date,
            time,
            line_items,
        })
    }
}

/// Local date and time for stamping a sale, truncated to whole seconds to
/// match the ledger's `HH:MM:SS` column format.
fn sale_timestamp() -> (NaiveDate, NaiveTime) {
    let now = Local::now().naive_local();
    let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
    (now.date(), time)
}
