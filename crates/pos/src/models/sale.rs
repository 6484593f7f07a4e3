//! Sales ledger records and checkout receipts.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use tillpoint_core::{CustomerId, Money, PaymentMethod, ProductId, SaleId};

/// One line of a recorded sale. Immutable once written; the ledger is
/// append-only.
///
/// A single checkout produces one `sale_id` shared by 1..N line items.
/// Product name and unit price are snapshots taken at sale time, so later
/// catalog edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLineItem {
    #[serde(rename = "Sale_ID")]
    pub sale_id: SaleId,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Time")]
    pub time: NaiveTime,
    #[serde(rename = "Customer_ID")]
    pub customer_id: CustomerId,
    #[serde(rename = "Customer_Name")]
    pub customer_name: String,
    #[serde(rename = "Product_ID")]
    pub product_id: ProductId,
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Unit_Price")]
    pub unit_price: Money,
    #[serde(rename = "Total_Amount")]
    pub total_amount: Money,
    #[serde(rename = "Payment_Method")]
    pub payment_method: PaymentMethod,
}

/// What the checkout engine hands back after a successful sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Sale ID shared by every line in this checkout.
    pub sale_id: SaleId,
    /// Sum of the line totals.
    pub total_amount: Money,
    /// Sale date, local time.
    pub date: NaiveDate,
    /// Sale time, local time, whole seconds.
    pub time: NaiveTime,
    /// The ledger rows written for this sale.
    pub line_items: Vec<SaleLineItem>,
}
