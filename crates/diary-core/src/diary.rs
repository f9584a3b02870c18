//! # diary
//!
//! why: own the record collection and keep it mirrored to durable storage
//! relations: drives storage.rs on every mutation, uses quantity.rs for
//!            input handling and export.rs for snapshot hand-off
//! what: Diary service with create/update/delete, sorted views, totals, export

use serde::Serialize;

use crate::clock;
use crate::entry::Entry;
use crate::errors::DiaryError;
use crate::export::{Handoff, HandoffError, EXPORT_FILE_NAME};
use crate::quantity::Quantities;
use crate::sort::{sorted, SortOrder};
use crate::storage::Storage;

/// Aggregate sums across the collection, consumed by the chart surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub whey: f64,
    pub eggs: f64,
    pub rice: f64,
}

/// The in-memory owner of the diary collection
///
/// Holds the entries in insertion order and writes the whole collection
/// back to storage at the end of every successful mutation. Mutations
/// take `&mut self`, so two mutations can never interleave their
/// persistence writes.
///
/// A failed save keeps the in-memory change and surfaces
/// [`DiaryError::Persistence`]; memory and blob diverge until the next
/// successful save.
pub struct Diary<S: Storage> {
    entries: Vec<Entry>,
    storage: S,
}

impl<S: Storage> Diary<S> {
    /// Open the diary, loading whatever the storage holds
    ///
    /// A missing or malformed blob yields an empty diary; startup never
    /// fails on bad history.
    pub fn open(storage: S) -> Self {
        let entries = storage.load_all();
        log::info!("diary opened with {} entries", entries.len());
        Self { entries, storage }
    }

    /// Record a new entry from raw form input
    ///
    /// Allocates a fresh unique id, stamps today's date, appends and
    /// persists the full collection.
    pub fn create(
        &mut self,
        raw_whey: &str,
        raw_eggs: &str,
        raw_rice: &str,
    ) -> Result<Entry, DiaryError> {
        let quantities = Quantities::parse(raw_whey, raw_eggs, raw_rice)?;
        let entry = Entry::new(self.allocate_id(), clock::today(), quantities);
        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Replace the quantities of an existing entry; id and date stay fixed
    pub fn update(
        &mut self,
        id: u64,
        raw_whey: &str,
        raw_eggs: &str,
        raw_rice: &str,
    ) -> Result<Entry, DiaryError> {
        let quantities = Quantities::parse(raw_whey, raw_eggs, raw_rice)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DiaryError::NotFound(id))?;
        entry.set_quantities(quantities);
        let updated = entry.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the entry with the given id
    ///
    /// Strict: deleting an id that is not present fails with
    /// [`DiaryError::NotFound`] and leaves the collection untouched.
    pub fn delete(&mut self, id: u64) -> Result<(), DiaryError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(DiaryError::NotFound(id))?;
        self.entries.remove(position);
        self.persist()?;
        Ok(())
    }

    /// A freshly ordered copy of the collection; never touches storage
    pub fn entries_sorted(&self, order: SortOrder) -> Vec<Entry> {
        sorted(&self.entries, order)
    }

    /// Look up a single entry, for the edit flow
    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The collection in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Read access to the owned storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate sums for the chart surface
    pub fn totals(&self) -> Totals {
        let mut totals = Totals {
            whey: 0.0,
            eggs: 0.0,
            rice: 0.0,
        };
        for e in &self.entries {
            totals.whey += e.whey;
            totals.eggs += e.eggs;
            totals.rice += e.rice;
        }
        totals
    }

    /// Deliver the persisted blob to the user through the given hand-off
    ///
    /// Exports exactly what storage holds, not a re-serialization of the
    /// in-memory view.
    pub fn export_snapshot<H: Handoff>(&self, handoff: &H) -> Result<(), DiaryError> {
        if self.entries.is_empty() {
            return Err(DiaryError::EmptyExport);
        }
        if !handoff.is_available() {
            return Err(HandoffError::Unavailable.into());
        }
        let bytes = self.storage.snapshot()?;
        handoff.deliver(EXPORT_FILE_NAME, &bytes)?;
        Ok(())
    }

    /// Fresh id derived from the current time, bumped past every existing
    /// id so creations in the same millisecond stay unique
    fn allocate_id(&self) -> u64 {
        let floor = self
            .entries
            .iter()
            .map(|e| e.id)
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(0);
        clock::timestamp_ms().max(floor)
    }

    fn persist(&mut self) -> Result<(), DiaryError> {
        self.storage.save_all(&self.entries)?;
        Ok(())
    }
}
