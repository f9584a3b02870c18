//! # entry
//!
//! why: define the single logged record the diary collects
//! relations: created by diary.rs, serialized as-is by storage implementations
//! what: Entry struct with identity, creation date and the three quantities

use serde::{Deserialize, Serialize};

use crate::quantity::Quantities;

/// One logged record of daily intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identity, derived from creation time in millis; recency sort key
    pub id: u64,
    /// Creation date as dd/mm/yyyy, stamped once and never recomputed
    pub date: String,
    /// Whey measures consumed
    pub whey: f64,
    /// Eggs consumed
    pub eggs: f64,
    /// Rice grams consumed
    pub rice: f64,
}

impl Entry {
    /// Create a new entry from validated quantities
    pub fn new(id: u64, date: String, quantities: Quantities) -> Self {
        Self {
            id,
            date,
            whey: quantities.whey,
            eggs: quantities.eggs,
            rice: quantities.rice,
        }
    }

    /// Replace the three quantities in place; id and date stay untouched
    pub fn set_quantities(&mut self, quantities: Quantities) {
        self.whey = quantities.whey;
        self.eggs = quantities.eggs;
        self.rice = quantities.rice;
    }
}
