//! # clock
//!
//! why: stamp entry identity and creation date on both native and browser targets
//! relations: used by diary.rs when creating entries
//! what: per-target millisecond timestamps and dd/mm/yyyy date strings

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub fn timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Today's date as dd/mm/yyyy
#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}/{:02}/{}",
        now.get_date(),
        now.get_month() + 1,
        now.get_full_year()
    )
}
