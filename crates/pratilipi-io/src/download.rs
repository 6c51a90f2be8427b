//! File download via Blob URLs.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads by creating a `Blob`, generating an object URL, and
//! programmatically clicking a temporary `<a>` element.
//!
//! The object URL and the temporary anchor are held by guards that
//! undo them on drop, so both are released even when a later DOM call
//! fails.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use pratilipi_core::{Download, DownloadSink};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Saves translated documents through the browser's download mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloads;

impl DownloadSink for BrowserDownloads {
    type Error = DownloadError;

    fn save(&self, download: &Download) -> Result<(), DownloadError> {
        trigger_download(&download.bytes, &download.file_name, Download::MEDIA_TYPE)
    }
}

/// Wrap `data` in a `Blob` of the given media type.
pub(crate) fn blob_from_bytes(data: &[u8], mime_type: &str) -> Result<web_sys::Blob, JsValue> {
    let array = js_sys::Uint8Array::from(data);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)
}

/// An object URL, revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &web_sys::Blob) -> Result<Self, DownloadError> {
        Ok(Self(web_sys::Url::create_object_url_with_blob(blob)?))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

/// A node appended to a parent, removed when dropped.
struct Attached<'a> {
    parent: &'a web_sys::HtmlElement,
    child: &'a web_sys::HtmlAnchorElement,
}

impl<'a> Attached<'a> {
    fn append(
        parent: &'a web_sys::HtmlElement,
        child: &'a web_sys::HtmlAnchorElement,
    ) -> Result<Self, DownloadError> {
        parent.append_child(child)?;
        Ok(Self { parent, child })
    }
}

impl Drop for Attached<'_> {
    fn drop(&mut self) {
        let _ = self.parent.remove_child(self.child);
    }
}

/// Trigger a file download in the browser.
///
/// Creates a `Blob` from `data`, generates an object URL, and
/// programmatically clicks a temporary `<a download="filename">` element.
/// The anchor is removed and the object URL revoked on every path
/// after they were created.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let blob = blob_from_bytes(data, mime_type)?;
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;
    anchor.set_href(&url.0);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none")?;

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    let _attached = Attached::append(&body, &anchor)?;
    anchor.click();

    Ok(())
}
