//! # storage
//!
//! why: persist the diary in the browser, which has no filesystem
//! relations: implements diary-core's Storage over window.localStorage
//! what: LocalStorageStore holding the same json blob FileStorage keeps on disk

use diary_core::storage::{holds_invariants, Storage, StorageError};
use diary_core::Entry;

/// localStorage key holding the serialized collection
const STORAGE_KEY: &str = "bulking_diary_entries";

/// window.localStorage-backed storage under a fixed key
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl Storage for LocalStorageStore {
    fn load_all(&self) -> Vec<Entry> {
        let backend = match Self::backend() {
            Some(backend) => backend,
            None => {
                log::warn!("localStorage unavailable, starting empty");
                return Vec::new();
            }
        };

        if let Ok(Some(json)) = backend.get_item(STORAGE_KEY) {
            match serde_json::from_str::<Vec<Entry>>(&json) {
                Ok(entries) if holds_invariants(&entries) => {
                    log::info!("loaded {} entries from localStorage", entries.len());
                    return entries;
                }
                _ => {
                    log::warn!("stored diary is malformed, starting empty");
                    return Vec::new();
                }
            }
        }

        log::info!("no stored diary, starting empty");
        Vec::new()
    }

    fn save_all(&mut self, entries: &[Entry]) -> Result<(), StorageError> {
        let backend = Self::backend()
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_string()))?;
        let json = serde_json::to_string_pretty(entries)?;
        backend
            .set_item(STORAGE_KEY, &json)
            .map_err(|_| StorageError::Backend("localStorage rejected the write".to_string()))
    }

    fn snapshot(&self) -> Result<Vec<u8>, StorageError> {
        let backend = Self::backend()
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_string()))?;
        let json = backend
            .get_item(STORAGE_KEY)
            .map_err(|_| StorageError::Backend("localStorage read failed".to_string()))?
            .ok_or_else(|| StorageError::Backend("no stored diary".to_string()))?;
        Ok(json.into_bytes())
    }
}
