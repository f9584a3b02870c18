//! # diary-core
//!
//! why: implement the nutrition diary record rules in pure, portable rust
//! relations: used by diary-storage for file persistence, diary-wasm for
//!            browser execution
//! what: Entry model, quantity validation, sort orders, Diary service,
//!       storage and hand-off traits, error taxonomy

pub mod clock;
pub mod diary;
pub mod entry;
pub mod errors;
pub mod export;
pub mod quantity;
pub mod sort;
pub mod storage;

pub use diary::{Diary, Totals};
pub use entry::Entry;
pub use errors::{DiaryError, ValidationError};
pub use export::{Handoff, HandoffError, EXPORT_FILE_NAME};
pub use quantity::Quantities;
pub use sort::SortOrder;
pub use storage::{InMemoryStorage, Storage, StorageError};
