//! Flat-file repositories.
//!
//! Each dataset is owned by exactly one repository object, which loads it
//! wholesale on open and rewrites it wholesale on save. The tabular stores
//! (catalog, ledger, customers) are CSV with serde row structs; shopping
//! lists are a single JSON document.
//!
//! ID counters live in a shared `counters.json` sidecar. A repository only
//! ever read-modify-writes its own entry, and on open takes the further
//! along of the sidecar entry and the highest ID in its table, so ID
//! generation never depends on table scan order and a stale sidecar never
//! reissues an ID.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod customers;
pub mod ledger;
pub mod shopping_lists;

pub use catalog::Catalog;
pub use customers::CustomerDirectory;
pub use ledger::Ledger;
pub use shopping_lists::ShoppingListStore;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tabular dataset could not be read or written.
    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    /// The shopping-list or counter document could not be read or written.
    #[error("Document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read every row of a CSV table. A missing file is an empty table;
/// a malformed row is an error, never silently dropped.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(Into::into)
}

/// Rewrite a CSV table in full.
pub(crate) fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Next unissued sequence numbers for each ID space.
///
/// A zero entry means "not recorded"; the owning repository then falls back
/// to `max(existing id) + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Counters {
    #[serde(default)]
    pub product: u32,
    #[serde(default)]
    pub customer: u32,
    #[serde(default)]
    pub sale: u32,
}

impl Counters {
    /// Load the sidecar, or `None` if it does not exist yet.
    pub(crate) fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Read-modify-write one repository's entry, leaving the others as they
    /// were on disk.
    pub(crate) fn update(path: &Path, apply: impl FnOnce(&mut Self)) -> Result<(), StoreError> {
        let mut counters = Self::load(path)?.unwrap_or_default();
        apply(&mut counters);
        fs::write(path, serde_json::to_string_pretty(&counters)?)?;
        Ok(())
    }
}

/// Resolve a repository's next sequence number: the persisted counter or
/// one past the highest ID in the loaded table, whichever is further along.
/// A sidecar that is missing, unset, or lagging behind the table never
/// causes an ID to be issued twice.
pub(crate) fn recover_seq(counter: u32, ids: impl Iterator<Item = u32>) -> u32 {
    counter.max(ids.max().map_or(1, |highest| highest + 1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recover_seq_prefers_counter_when_ahead() {
        assert_eq!(recover_seq(7, [1, 2, 3].into_iter()), 7);
        assert_eq!(recover_seq(7, std::iter::empty()), 7);
    }

    #[test]
    fn test_recover_seq_falls_back_to_max_id() {
        assert_eq!(recover_seq(0, [1, 5, 3].into_iter()), 6);
        assert_eq!(recover_seq(0, std::iter::empty()), 1);
        // A lagging sidecar never reissues an ID.
        assert_eq!(recover_seq(2, [1, 5, 3].into_iter()), 6);
    }

    #[test]
    fn test_counters_update_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counters.json");

        Counters::update(&path, |c| c.product = 11).unwrap();
        Counters::update(&path, |c| c.sale = 4).unwrap();

        let counters = Counters::load(&path).unwrap().unwrap();
        assert_eq!(counters.product, 11);
        assert_eq!(counters.customer, 0);
        assert_eq!(counters.sale, 4);
    }
}
