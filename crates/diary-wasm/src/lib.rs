//! # diary-wasm
//!
//! why: run the diary service in the browser behind the web ui
//! relations: glues diary-core to window.localStorage and the download hand-off
//! what: thread-local diary singleton, wasm-bindgen boundary api
//!
//! Compiles to an empty library off wasm32; the native host uses
//! diary-storage directly.

#[cfg(target_arch = "wasm32")]
mod handoff;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
mod api {
    use std::cell::RefCell;
    use std::fmt::Display;

    use wasm_bindgen::prelude::*;

    use diary_core::{Diary, SortOrder};

    use crate::handoff::DownloadHandoff;
    use crate::storage::LocalStorageStore;

    // Thread-local storage for the diary instance
    thread_local! {
        static DIARY: RefCell<Option<Diary<LocalStorageStore>>> = RefCell::new(None);
    }

    fn to_js_err(err: impl Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    fn with_diary<T>(
        f: impl FnOnce(&mut Diary<LocalStorageStore>) -> Result<T, JsValue>,
    ) -> Result<T, JsValue> {
        DIARY.with(|slot| {
            let mut slot = slot.borrow_mut();
            let diary = slot
                .as_mut()
                .ok_or_else(|| JsValue::from_str("diary not initialized, call init_diary first"))?;
            f(diary)
        })
    }

    fn parse_order(order: &str) -> Result<SortOrder, JsValue> {
        match order {
            "recent" => Ok(SortOrder::Recent),
            "most_whey" => Ok(SortOrder::MostWhey),
            "most_rice" => Ok(SortOrder::MostRice),
            other => Err(JsValue::from_str(&format!("unknown sort order: {other}"))),
        }
    }

    /// Set up logging and load the persisted diary
    #[wasm_bindgen]
    pub fn init_diary() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        DIARY.with(|slot| {
            *slot.borrow_mut() = Some(Diary::open(LocalStorageStore::new()));
        });
    }

    /// Record a new entry from the three raw form fields
    ///
    /// Returns the created entry as a json string; rejects invalid input
    /// with a human-readable message.
    #[wasm_bindgen]
    pub fn create_entry(whey: &str, eggs: &str, rice: &str) -> Result<String, JsValue> {
        with_diary(|diary| {
            let entry = diary.create(whey, eggs, rice).map_err(to_js_err)?;
            serde_json::to_string(&entry).map_err(to_js_err)
        })
    }

    /// Replace the quantities of an existing entry
    #[wasm_bindgen]
    pub fn update_entry(id: u64, whey: &str, eggs: &str, rice: &str) -> Result<String, JsValue> {
        with_diary(|diary| {
            let entry = diary.update(id, whey, eggs, rice).map_err(to_js_err)?;
            serde_json::to_string(&entry).map_err(to_js_err)
        })
    }

    /// Remove an entry by id
    #[wasm_bindgen]
    pub fn delete_entry(id: u64) -> Result<(), JsValue> {
        with_diary(|diary| diary.delete(id).map_err(to_js_err))
    }

    /// Look up a single entry for the edit flow; null when absent
    #[wasm_bindgen]
    pub fn get_entry(id: u64) -> Result<Option<String>, JsValue> {
        with_diary(|diary| match diary.get(id) {
            Some(entry) => serde_json::to_string(entry).map(Some).map_err(to_js_err),
            None => Ok(None),
        })
    }

    /// The collection ordered for display, as a json array string
    ///
    /// `order` is one of "recent", "most_whey", "most_rice".
    #[wasm_bindgen]
    pub fn entries_sorted(order: &str) -> Result<String, JsValue> {
        let order = parse_order(order)?;
        with_diary(|diary| serde_json::to_string(&diary.entries_sorted(order)).map_err(to_js_err))
    }

    /// Aggregate sums for the chart, as a json object string
    #[wasm_bindgen]
    pub fn diary_totals() -> Result<String, JsValue> {
        with_diary(|diary| serde_json::to_string(&diary.totals()).map_err(to_js_err))
    }

    /// Number of recorded entries
    #[wasm_bindgen]
    pub fn entry_count() -> Result<usize, JsValue> {
        with_diary(|diary| Ok(diary.len()))
    }

    /// Download the persisted diary as a json file
    #[wasm_bindgen]
    pub fn export_entries() -> Result<(), JsValue> {
        with_diary(|diary| diary.export_snapshot(&DownloadHandoff::new()).map_err(to_js_err))
    }
}
