//! Report aggregation.
//!
//! Reports come back as plain data; rendering them is the presentation
//! layer's problem.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tillpoint_core::{CustomerId, Money, PaymentMethod};

use crate::store::{CustomerDirectory, Ledger, ShoppingListStore};

/// How many entries the "top" rankings carry.
const TOP_N: usize = 10;

/// Sales aggregated per product for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u32,
    pub amount: Money,
}

/// One day's sales at a glance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Sum of every line total recorded that day.
    pub gross_sales: Money,
    /// Distinct sale IDs, not ledger rows.
    pub transactions: usize,
    /// Gross divided by transactions, rounded to two decimals; zero when
    /// there were no sales.
    pub average_transaction: Money,
    /// Totals per payment method, in display order, methods with no sales
    /// omitted.
    pub by_payment_method: Vec<(PaymentMethod, Money)>,
    /// Best-selling products by amount, highest first, at most ten.
    pub top_products: Vec<ProductSales>,
}

/// A customer ranked by lifetime purchases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCustomer {
    pub id: CustomerId,
    pub name: String,
    pub total_purchases: Money,
}

/// Customer base at a glance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub total_customers: usize,
    /// Sum of every customer's running purchase total.
    pub total_purchases: Money,
    /// Total divided by customer count, rounded to two decimals; zero when
    /// there are no customers.
    pub average_purchase: Money,
    /// Biggest spenders, highest first, at most ten.
    pub top_customers: Vec<TopCustomer>,
    /// Customers whose shopping list has at least one entry.
    pub active_shopping_lists: usize,
}

/// Aggregate one day of ledger rows.
#[must_use]
pub fn daily_summary(ledger: &Ledger, date: NaiveDate) -> DailySummary {
    let rows = ledger.rows_for_date(date);

    let gross_sales: Money = rows.iter().map(|r| r.total_amount).sum();
    let transactions = {
        let mut ids: Vec<_> = rows.iter().map(|r| r.sale_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    };

    let by_payment_method = PaymentMethod::ALL
        .into_iter()
        .filter_map(|method| {
            let amount: Money = rows
                .iter()
                .filter(|r| r.payment_method == method)
                .map(|r| r.total_amount)
                .sum();
            (amount > Money::ZERO).then_some((method, amount))
        })
        .collect();

    let mut per_product: Vec<ProductSales> = Vec::new();
    for row in &rows {
        match per_product
            .iter_mut()
            .find(|p| p.product_name == row.product_name)
        {
            Some(entry) => {
                entry.quantity += row.quantity;
                entry.amount += row.total_amount;
            }
            None => per_product.push(ProductSales {
                product_name: row.product_name.clone(),
                quantity: row.quantity,
                amount: row.total_amount,
            }),
        }
    }
    per_product.sort_by(|a, b| b.amount.cmp(&a.amount));
    per_product.truncate(TOP_N);

    DailySummary {
        date,
        gross_sales,
        transactions,
        average_transaction: mean(gross_sales, transactions),
        by_payment_method,
        top_products: per_product,
    }
}

/// Aggregate the customer base and shopping list activity.
#[must_use]
pub fn customer_summary(
    customers: &CustomerDirectory,
    shopping_lists: &ShoppingListStore,
) -> CustomerSummary {
    let all = customers.customers();
    let total_purchases: Money = all.iter().map(|c| c.total_purchases).sum();

    let mut top: Vec<TopCustomer> = all
        .iter()
        .map(|c| TopCustomer {
            id: c.id,
            name: c.name.clone(),
            total_purchases: c.total_purchases,
        })
        .collect();
    top.sort_by(|a, b| b.total_purchases.cmp(&a.total_purchases));
    top.truncate(TOP_N);

    CustomerSummary {
        total_customers: all.len(),
        total_purchases,
        average_purchase: mean(total_purchases, all.len()),
        top_customers: top,
        active_shopping_lists: shopping_lists.active_list_count(),
    }
}

/// Total divided by count, rounded to two decimals; zero for an empty
/// population.
fn mean(total: Money, count: usize) -> Money {
    if count == 0 {
        return Money::ZERO;
    }
    let amount = (total.amount() / Decimal::from(count)).round_dp(2);
    // Non-negative over a positive count stays non-negative.
    Money::new(amount).unwrap_or_default()
}
