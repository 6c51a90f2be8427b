//! Translation service transport over the browser `fetch` API.
//!
//! Builds the multipart body with `FormData`, so the browser picks the
//! boundary and content type. Replies are read fully into memory as
//! the core expects.

use pratilipi_core::{ServiceReply, Transport, TranslationRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::download::blob_from_bytes;

/// Errors from issuing a request or reading its reply.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A browser API call returned an error or a required object was missing.
    ///
    /// Network failures and CORS rejections surface here as the
    /// `TypeError` raised by `fetch`.
    #[error("fetch error: {0}")]
    JsError(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// [`Transport`] backed by `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
impl Transport for FetchTransport {
    type Error = FetchError;

    async fn send(&self, request: &TranslationRequest) -> Result<ServiceReply, FetchError> {
        let form = web_sys::FormData::new()?;
        let file = blob_from_bytes(&request.bytes, TranslationRequest::FILE_MEDIA_TYPE)?;
        form.append_with_blob_and_filename(
            TranslationRequest::FILE_FIELD,
            &file,
            &request.file_name,
        )?;
        for (name, value) in request.form_fields() {
            form.append_with_str(name, value)?;
        }

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        fetch(&request.url, &init).await
    }

    async fn get(&self, url: &str) -> Result<ServiceReply, FetchError> {
        let init = web_sys::RequestInit::new();
        init.set_method("GET");
        fetch(url, &init).await
    }
}

/// Issue one request and read the whole body, whatever the status.
#[allow(clippy::future_not_send)]
async fn fetch(url: &str, init: &web_sys::RequestInit) -> Result<ServiceReply, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::JsError("no global window".into()))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str_and_init(url, init))
        .await?
        .dyn_into()?;
    let buffer = JsFuture::from(response.array_buffer()?).await?;

    Ok(ServiceReply {
        status: response.status(),
        body: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
