//! # sort
//!
//! why: give the list surface deterministic orderings over the collection
//! relations: used by diary.rs for entries_sorted
//! what: SortOrder enum, stable descending sorts with insertion-order ties

use crate::entry::Entry;

/// The orderings the list surface can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first (descending id)
    Recent,
    /// Largest whey intake first, ties keep insertion order
    MostWhey,
    /// Largest rice intake first, ties keep insertion order
    MostRice,
}

/// Sort a copy of the collection; the caller's order is never touched
///
/// `sort_by` is stable, so entries with equal quantities keep their
/// relative insertion order. Quantities are validated finite, which makes
/// `total_cmp` agree with the usual numeric order.
pub fn sorted(entries: &[Entry], order: SortOrder) -> Vec<Entry> {
    let mut view = entries.to_vec();
    match order {
        SortOrder::Recent => view.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::MostWhey => view.sort_by(|a, b| b.whey.total_cmp(&a.whey)),
        SortOrder::MostRice => view.sort_by(|a, b| b.rice.total_cmp(&a.rice)),
    }
    view
}
