//! # storage
//!
//! why: abstract durable persistence of the whole collection as one blob
//! relations: driven by diary.rs on every mutation; file implementation in
//!            diary-storage, browser implementation in diary-wasm
//! what: Storage trait, StorageError, invariant check for loaded blobs,
//!       InMemoryStorage for testing

use std::collections::HashSet;

use thiserror::Error;

use crate::entry::Entry;

/// Failures of the durable persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// trait for durable storage of the diary collection
///
/// this abstraction allows the same service to work with:
/// - real filesystem (native, diary-storage)
/// - window.localStorage (browser, diary-wasm)
/// - in-memory (testing)
pub trait Storage {
    /// load the persisted collection
    ///
    /// an absent, unreadable or malformed blob yields an empty collection
    /// so the diary stays usable with zero history
    fn load_all(&self) -> Vec<Entry>;

    /// serialize the entire collection and atomically replace the blob
    fn save_all(&mut self, entries: &[Entry]) -> Result<(), StorageError>;

    /// the current durable bytes, exactly as persisted
    ///
    /// export reads these instead of re-serializing memory, so the user
    /// receives what is actually on disk
    fn snapshot(&self) -> Result<Vec<u8>, StorageError>;
}

/// Check the collection invariants on a loaded blob: unique ids and
/// finite, non-negative quantities. A blob that fails is malformed and
/// must be discarded as a whole.
pub fn holds_invariants(entries: &[Entry]) -> bool {
    let mut seen = HashSet::new();
    entries.iter().all(|e| {
        seen.insert(e.id)
            && [e.whey, e.eggs, e.rice]
                .iter()
                .all(|q| q.is_finite() && *q >= 0.0)
    })
}

/// in-memory storage for testing
///
/// holds the collection in memory, no persistence across restarts
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: Vec<Entry>,
}

impl InMemoryStorage {
    /// create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// the collection as last saved, for asserting persistence in tests
    pub fn persisted(&self) -> &[Entry] {
        &self.entries
    }
}

impl Storage for InMemoryStorage {
    fn load_all(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn save_all(&mut self, entries: &[Entry]) -> Result<(), StorageError> {
        self.entries = entries.to_vec();
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<u8>, StorageError> {
        Ok(serde_json::to_vec_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantities;

    fn entry(id: u64, whey: f64) -> Entry {
        Entry::new(
            id,
            "01/01/2024".to_string(),
            Quantities {
                whey,
                eggs: 0.0,
                rice: 0.0,
            },
        )
    }

    #[test]
    fn new_storage_is_empty() {
        let storage = InMemoryStorage::new();
        assert!(storage.load_all().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut storage = InMemoryStorage::new();
        let entries = vec![entry(1, 2.0), entry(2, 3.5)];

        storage.save_all(&entries).unwrap();

        assert_eq!(storage.load_all(), entries);
    }

    #[test]
    fn snapshot_deserializes_to_saved_collection() {
        let mut storage = InMemoryStorage::new();
        let entries = vec![entry(1, 2.0)];
        storage.save_all(&entries).unwrap();

        let bytes = storage.snapshot().unwrap();
        let decoded: Vec<Entry> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded, entries);
    }

    #[test]
    fn invariants_hold_for_valid_collection() {
        assert!(holds_invariants(&[entry(1, 2.0), entry(2, 0.0)]));
        assert!(holds_invariants(&[]));
    }

    #[test]
    fn duplicate_ids_break_invariants() {
        assert!(!holds_invariants(&[entry(7, 2.0), entry(7, 3.0)]));
    }

    #[test]
    fn negative_quantity_breaks_invariants() {
        assert!(!holds_invariants(&[entry(1, -0.5)]));
    }
}
