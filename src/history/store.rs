//! History Store Module
//!
//! Persistence engine for past calculations: a capacity-bounded list with
//! FIFO eviction plus a single-slot last-result cache, each stored as one
//! JSON blob under a fixed key.

use tracing::warn;

use crate::error::Result;
use crate::history::{HISTORY_KEY, LAST_RESULT_KEY, MAX_HISTORY_ITEMS};
use crate::models::{CalculationResult, HistoryEntry, LastResult};
use crate::storage::LocalStore;

// == History Store ==
/// Bounded history of past calculations backed by local storage.
///
/// The list is kept newest first and never exceeds [`MAX_HISTORY_ITEMS`]
/// entries after any mutation; appending past capacity drops the oldest
/// entry. There is a single writer, so no locking is involved.
#[derive(Debug)]
pub struct HistoryStore {
    /// Underlying key-value storage
    storage: LocalStore,
}

impl HistoryStore {
    // == Constructor ==
    /// Creates a new HistoryStore on top of the given storage.
    pub fn new(storage: LocalStore) -> Self {
        Self { storage }
    }

    // == Append ==
    /// Inserts a calculation at the head of the history and persists the
    /// full list.
    ///
    /// When the list grows past [`MAX_HISTORY_ITEMS`], the tail (oldest)
    /// entry is removed before persisting.
    ///
    /// # Arguments
    /// * `result` - The calculation to record
    pub fn append(&self, result: &CalculationResult) -> Result<HistoryEntry> {
        let entry = HistoryEntry::from(result);

        let mut entries = self.load_all();
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY_ITEMS);

        let blob = serde_json::to_string(&entries)?;
        self.storage.write(HISTORY_KEY, &blob)?;

        Ok(entry)
    }

    // == Load All ==
    /// Returns all stored entries, newest first.
    ///
    /// An absent or corrupt blob yields an empty list; parse failures are
    /// logged and never propagated.
    pub fn load_all(&self) -> Vec<HistoryEntry> {
        let blob = match self.storage.read(HISTORY_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read history blob: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding corrupt history blob: {}", e);
                Vec::new()
            }
        }
    }

    // == Clear ==
    /// Empties the history and removes its persisted blob.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(HISTORY_KEY)
    }

    // == Save Last ==
    /// Overwrites the single-slot last-result cache.
    ///
    /// # Arguments
    /// * `result` - The calculation to cache
    pub fn save_last(&self, result: &CalculationResult) -> Result<()> {
        let last = LastResult::from(result);
        let blob = serde_json::to_string(&last)?;
        self.storage.write(LAST_RESULT_KEY, &blob)
    }

    // == Load Last ==
    /// Returns the cached last result, if any.
    ///
    /// An absent or corrupt blob yields `None`, with the same tolerance
    /// as [`HistoryStore::load_all`].
    pub fn load_last(&self) -> Option<LastResult> {
        let blob = match self.storage.read(LAST_RESULT_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read last-result blob: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&blob) {
            Ok(last) => Some(last),
            Err(e) => {
                warn!("Discarding corrupt last-result blob: {}", e);
                None
            }
        }
    }
}
