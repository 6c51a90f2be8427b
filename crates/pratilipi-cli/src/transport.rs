//! `reqwest` implementation of [`Transport`].

use pratilipi_core::{ServiceReply, Transport, TranslationRequest};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Failure to get a reply from the service.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Sends requests with a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn read(response: reqwest::Response) -> Result<ServiceReply, HttpError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "reply received");
        Ok(ServiceReply { status, body })
    }
}

/// Multipart body: the document part first, then the language fields.
fn multipart(request: &TranslationRequest) -> Result<Form, HttpError> {
    let part = Part::bytes(request.bytes.to_vec())
        .file_name(request.file_name.clone())
        .mime_str(TranslationRequest::FILE_MEDIA_TYPE)?;
    let form = request
        .form_fields()
        .into_iter()
        .fold(Form::new().part(TranslationRequest::FILE_FIELD, part), |form, (name, value)| {
            form.text(name, value)
        });
    Ok(form)
}

impl Transport for ReqwestTransport {
    type Error = HttpError;

    async fn send(&self, request: &TranslationRequest) -> Result<ServiceReply, Self::Error> {
        debug!(url = %request.url, file = %request.file_name, "posting document");
        let response = self
            .client
            .post(&request.url)
            .multipart(multipart(request)?)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<ServiceReply, Self::Error> {
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}
