//! # handoff
//!
//! why: deliver the exported snapshot as a browser file download
//! relations: implements diary-core's Handoff for the export api in lib.rs
//! what: DownloadHandoff via a blob object url and a synthetic anchor click

use diary_core::{Handoff, HandoffError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Browser download hand-off
#[derive(Debug, Default)]
pub struct DownloadHandoff;

impl DownloadHandoff {
    pub fn new() -> Self {
        Self
    }
}

fn js_err(context: &str, err: JsValue) -> HandoffError {
    HandoffError::Failed(format!("{context}: {err:?}"))
}

impl Handoff for DownloadHandoff {
    fn is_available(&self) -> bool {
        web_sys::window().and_then(|w| w.document()).is_some()
    }

    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), HandoffError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(HandoffError::Unavailable)?;

        let text = String::from_utf8_lossy(bytes);
        let parts = js_sys::Array::of1(&JsValue::from_str(&text));
        let options = BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|err| js_err("creating the export blob failed", err))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|err| js_err("creating the object url failed", err))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|err| js_err("creating the download anchor failed", err))?
            .dyn_into()
            .map_err(|_| HandoffError::Failed("download anchor has the wrong type".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        Url::revoke_object_url(&url)
            .map_err(|err| js_err("revoking the object url failed", err))?;

        log::info!("exported diary as {file_name}");
        Ok(())
    }
}
