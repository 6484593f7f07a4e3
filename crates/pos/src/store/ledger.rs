//! Append-only sales ledger repository.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use tillpoint_core::SaleId;

use super::{Counters, StoreError, read_rows, recover_seq, write_rows};
use crate::config::PosConfig;
use crate::models::sale::SaleLineItem;

/// The sales transaction log, one row per sale line item.
///
/// Rows are only ever appended; saving rewrites the whole file but never
/// reorders or edits existing rows. One sale (one checkout) spans 1..N
/// consecutive rows sharing a `sale_id`.
#[derive(Debug)]
pub struct Ledger {
    table_path: PathBuf,
    counters_path: PathBuf,
    rows: Vec<SaleLineItem>,
    /// Sequence number of the next sale ID to issue.
    next_seq: u32,
}

impl Ledger {
    /// Open the ledger in the configured data directory, loading any
    /// existing table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the table or counter sidecar exists but
    /// cannot be read.
    pub fn open(config: &PosConfig) -> std::result::Result<Self, StoreError> {
        let table_path = config.sales_file();
        let counters_path = config.counters_file();
        let rows: Vec<SaleLineItem> = read_rows(&table_path)?;
        let counter = Counters::load(&counters_path)?.unwrap_or_default().sale;
        let next_seq = recover_seq(counter, rows.iter().map(|r| r.sale_id.seq()));
        debug!(rows = rows.len(), next_seq, "ledger opened");
        Ok(Self {
            table_path,
            counters_path,
            rows,
            next_seq,
        })
    }

    /// Issue the next sale ID. The first sale ever is `S0001`.
    ///
    /// Called once per checkout; every line of that checkout shares the
    /// returned ID.
    pub fn allocate_sale_id(&mut self) -> SaleId {
        let id = SaleId::new(self.next_seq);
        self.next_seq += 1;
        id
    }

    /// Append a line item in memory. Does not persist; checkout saves once
    /// after all its appends.
    pub fn append(&mut self, line: SaleLineItem) {
        self.rows.push(line);
    }

    /// Every ledger row, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[SaleLineItem] {
        &self.rows
    }

    /// Rows recorded on a given date.
    #[must_use]
    pub fn rows_for_date(&self, date: NaiveDate) -> Vec<&SaleLineItem> {
        self.rows.iter().filter(|r| r.date == date).collect()
    }

    /// Rows belonging to one sale.
    #[must_use]
    pub fn rows_for_sale(&self, sale_id: SaleId) -> Vec<&SaleLineItem> {
        self.rows.iter().filter(|r| r.sale_id == sale_id).collect()
    }

    /// Number of distinct sales recorded.
    #[must_use]
    pub fn sale_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.sale_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Rewrite the table and this repository's counter entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either write fails.
    pub fn save(&self) -> std::result::Result<(), StoreError> {
        write_rows(&self.table_path, &self.rows)?;
        Counters::update(&self.counters_path, |c| c.sale = self.next_seq)?;
        debug!(rows = self.rows.len(), "ledger saved");
        Ok(())
    }
}
