//! Request and reply shapes exchanged with the translation service.
//!
//! This module only describes HTTP traffic; sending it is the job of a
//! [`Transport`](crate::Transport) implementation.

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GENERIC_SERVER_MESSAGE, SubmitError};
use crate::file::PDF_MEDIA_TYPE;
use crate::language::LanguagePair;

/// Prefix added to the original file name of a translated document.
pub const DOWNLOAD_PREFIX: &str = "translated_";

/// A multipart `POST` to the translate endpoint.
///
/// Fields, in order: `file` (the PDF, sent with its original name),
/// `source_lang`, `target_lang`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Absolute endpoint URL.
    pub url: String,
    /// Original file name.
    pub file_name: String,
    /// PDF contents.
    pub bytes: Rc<[u8]>,
    /// Requested translation direction.
    pub languages: LanguagePair,
}

impl TranslationRequest {
    /// Multipart field carrying the document.
    pub const FILE_FIELD: &str = "file";

    /// Media type declared for the document part.
    pub const FILE_MEDIA_TYPE: &str = PDF_MEDIA_TYPE;

    /// Text fields following the file part.
    #[must_use]
    pub const fn form_fields(&self) -> [(&'static str, &'static str); 2] {
        [
            ("source_lang", self.languages.source.code()),
            ("target_lang", self.languages.target.code()),
        ]
    }

    /// Name the translated document is saved under.
    #[must_use]
    pub fn download_name(&self) -> String {
        format!("{DOWNLOAD_PREFIX}{}", self.file_name)
    }
}

/// Status and body of an HTTP reply, as read by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ServiceReply {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Interpret a reply to `request`.
    ///
    /// A 2xx body is taken as the translated PDF. Otherwise the body is
    /// read as a JSON error; its `detail` becomes the message.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Server`] for a non-2xx reply with a JSON
    /// body, and [`SubmitError::Transport`] when that body is not JSON.
    pub fn into_download(self, request: &TranslationRequest) -> Result<Download, SubmitError> {
        if self.is_success() {
            return Ok(Download {
                file_name: request.download_name(),
                bytes: self.body,
            });
        }
        let detail = error_detail(&self.body).map_err(|e| {
            SubmitError::Transport(format!(
                "unreadable error body for status {}: {e}",
                self.status
            ))
        })?;
        Err(SubmitError::Server {
            status: self.status,
            message: detail.unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_owned()),
        })
    }
}

/// Extract the human-readable message from a JSON error body.
///
/// Accepts `{"detail": "text"}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with
/// `"; "`. Anything else, including an empty string, yields `None`.
///
/// # Errors
///
/// Returns the parse error if `body` is not JSON.
pub fn error_detail(body: &[u8]) -> Result<Option<String>, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    let detail = match value.get("detail") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    };
    Ok(detail.filter(|text| !text.is_empty()))
}

/// A translated document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name (`translated_<original>`).
    pub file_name: String,
    /// PDF contents.
    pub bytes: Vec<u8>,
}

impl Download {
    /// Media type of every download.
    pub const MEDIA_TYPE: &str = PDF_MEDIA_TYPE;
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReply {
    /// `"healthy"` when the service is up.
    pub status: String,
}

impl HealthReply {
    /// Whether `reply` reports a healthy service.
    #[must_use]
    pub fn is_healthy(reply: &ServiceReply) -> bool {
        reply.is_success()
            && serde_json::from_slice::<Self>(&reply.body).is_ok_and(|h| h.status == "healthy")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn request() -> TranslationRequest {
        TranslationRequest {
            url: "http://localhost:8000/translate-pdf/".into(),
            file_name: "doc.pdf".into(),
            bytes: Rc::from(&b"%PDF-1.7"[..]),
            languages: LanguagePair::new(Language::English, Language::Hindi),
        }
    }

    fn reply(status: u16, body: &str) -> ServiceReply {
        ServiceReply {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn form_fields_carry_language_codes() {
        assert_eq!(
            request().form_fields(),
            [("source_lang", "en"), ("target_lang", "hi")]
        );
    }

    #[test]
    fn download_name_is_prefixed() {
        assert_eq!(request().download_name(), "translated_doc.pdf");
    }

    #[test]
    fn success_body_becomes_download() {
        let download = reply(200, "PDFBYTES").into_download(&request()).unwrap();
        assert_eq!(download.file_name, "translated_doc.pdf");
        assert_eq!(download.bytes, b"PDFBYTES");
    }

    #[test]
    fn any_2xx_is_success() {
        assert!(reply(201, "").is_success());
        assert!(reply(299, "").is_success());
        assert!(!reply(300, "").is_success());
        assert!(!reply(199, "").is_success());
    }

    #[test]
    fn string_detail_is_used_verbatim() {
        let err = reply(422, r#"{"detail": "unsupported language"}"#)
            .into_download(&request())
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Server {
                status: 422,
                message: "unsupported language".into(),
            }
        );
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = r#"{"detail": [
            {"loc": ["body", "file"], "msg": "Field required", "type": "missing"},
            {"loc": ["body", "source_lang"], "msg": "Input should be 'en' or 'hi'"}
        ]}"#;
        assert_eq!(
            error_detail(body.as_bytes()).unwrap().as_deref(),
            Some("Field required; Input should be 'en' or 'hi'")
        );
    }

    #[test]
    fn missing_or_empty_detail_falls_back_to_generic() {
        for body in [r#"{}"#, r#"{"detail": ""}"#, r#"{"detail": 5}"#, r#"[]"#] {
            let err = reply(500, body).into_download(&request()).unwrap_err();
            assert_eq!(err.user_message(), GENERIC_SERVER_MESSAGE, "body: {body}");
        }
    }

    #[test]
    fn non_json_error_body_is_a_transport_error() {
        let err = reply(502, "<html>Bad Gateway</html>")
            .into_download(&request())
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn health_requires_success_and_healthy_status() {
        assert!(HealthReply::is_healthy(&reply(200, r#"{"status": "healthy"}"#)));
        assert!(!HealthReply::is_healthy(&reply(200, r#"{"status": "degraded"}"#)));
        assert!(!HealthReply::is_healthy(&reply(503, r#"{"status": "healthy"}"#)));
        assert!(!HealthReply::is_healthy(&reply(200, "ok")));
    }
}
