//! Customer directory record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tillpoint_core::{CustomerId, Money};

/// A registered customer.
///
/// `total_purchases` is a denormalized running aggregate: the checkout
/// engine credits it at write time, and under correct operation it equals
/// the sum of the customer's ledger line totals. It is never recomputed
/// from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "Customer_ID")]
    pub id: CustomerId,
    #[serde(rename = "Customer_Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Registration_Date")]
    pub registration_date: NaiveDate,
    #[serde(rename = "Total_Purchases")]
    pub total_purchases: Money,
}

/// Input for [`CustomerDirectory::add_customer`](crate::store::CustomerDirectory::add_customer).
///
/// Registration date and the zeroed purchase total are filled in by the
/// directory.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}
