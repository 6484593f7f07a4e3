//! Customer directory repository.

use std::path::PathBuf;

use chrono::Local;
use tracing::debug;

use tillpoint_core::{CustomerId, Money};

use super::{Counters, StoreError, read_rows, recover_seq, write_rows};
use crate::config::PosConfig;
use crate::error::{PosError, Result};
use crate::models::customer::{Customer, NewCustomer};

/// The customer table: identity plus a running purchase total.
#[derive(Debug)]
pub struct CustomerDirectory {
    table_path: PathBuf,
    counters_path: PathBuf,
    customers: Vec<Customer>,
    /// Sequence number of the next ID to issue.
    next_seq: u32,
}

impl CustomerDirectory {
    /// Open the directory in the configured data directory, loading any
    /// existing table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the table or counter sidecar exists but
    /// cannot be read.
    pub fn open(config: &PosConfig) -> std::result::Result<Self, StoreError> {
        let table_path = config.customers_file();
        let counters_path = config.counters_file();
        let customers: Vec<Customer> = read_rows(&table_path)?;
        let counter = Counters::load(&counters_path)?.unwrap_or_default().customer;
        let next_seq = recover_seq(counter, customers.iter().map(|c| c.id.seq()));
        debug!(customers = customers.len(), next_seq, "customer directory opened");
        Ok(Self {
            table_path,
            counters_path,
            customers,
            next_seq,
        })
    }

    /// Register a customer and persist the table. The first registration
    /// gets `C001`; the registration date is today and the purchase total
    /// starts at zero.
    ///
    /// # Errors
    ///
    /// Returns `PosError::Validation` if the name is blank, or
    /// `PosError::Persistence` if the save fails.
    pub fn add_customer(&mut self, new: NewCustomer) -> Result<CustomerId> {
        if new.name.trim().is_empty() {
            return Err(PosError::Validation("customer name is required".to_owned()));
        }

        let id = CustomerId::new(self.next_seq);
        self.next_seq += 1;
        self.customers.push(Customer {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            address: new.address,
            registration_date: Local::now().date_naive(),
            total_purchases: Money::ZERO,
        });
        self.save()?;
        Ok(id)
    }

    /// Look up a customer by ID.
    #[must_use]
    pub fn find_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Add a sale total to a customer's running purchase aggregate, in
    /// memory. Does not persist; checkout saves once after all its
    /// mutations.
    ///
    /// # Errors
    ///
    /// Returns `PosError::NotFound` for an unknown ID; nothing is credited
    /// in that case.
    pub fn credit_purchase(&mut self, id: CustomerId, amount: Money) -> Result<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PosError::NotFound(format!("customer {id}")))?;
        customer.total_purchases += amount;
        Ok(())
    }

    /// Every customer, in registration (ID) order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Rewrite the table and this repository's counter entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either write fails.
    pub fn save(&self) -> std::result::Result<(), StoreError> {
        write_rows(&self.table_path, &self.customers)?;
        Counters::update(&self.counters_path, |c| c.customer = self.next_seq)?;
        debug!(rows = self.customers.len(), "customer directory saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    fn open_directory(dir: &Path) -> CustomerDirectory {
        CustomerDirectory::open(&PosConfig::new(dir)).unwrap()
    }

    fn priya() -> NewCustomer {
        NewCustomer {
            name: "Priya Sharma".to_owned(),
            phone: "98765 43210".to_owned(),
            email: "priya@example.com".to_owned(),
            address: "12 Market Road".to_owned(),
        }
    }

    #[test]
    fn test_first_customer_is_c001() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(dir.path());

        let id = directory.add_customer(priya()).unwrap();
        assert_eq!(id.to_string(), "C001");
        assert_eq!(directory.find_by_id(id).unwrap().total_purchases, Money::ZERO);
    }

    #[test]
    fn test_add_customer_requires_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(dir.path());
        assert!(matches!(
            directory.add_customer(NewCustomer::default()),
            Err(PosError::Validation(_))
        ));
    }

    #[test]
    fn test_credit_purchase_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(dir.path());
        let id = directory.add_customer(priya()).unwrap();

        directory
            .credit_purchase(id, Money::parse("240.00").unwrap())
            .unwrap();
        directory
            .credit_purchase(id, Money::parse("0.10").unwrap())
            .unwrap();

        assert_eq!(
            directory.find_by_id(id).unwrap().total_purchases,
            Money::parse("240.10").unwrap()
        );
    }

    #[test]
    fn test_credit_purchase_unknown_customer() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(dir.path());
        assert!(matches!(
            directory.credit_purchase(CustomerId::new(5), Money::ZERO),
            Err(PosError::NotFound(_))
        ));
    }

    #[test]
    fn test_roundtrip_preserves_totals_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(dir.path());
        let id = directory.add_customer(priya()).unwrap();
        directory
            .credit_purchase(id, Money::parse("123.45").unwrap())
            .unwrap();
        directory.save().unwrap();

        let reloaded = open_directory(dir.path());
        assert_eq!(reloaded.customers(), directory.customers());
    }
}
