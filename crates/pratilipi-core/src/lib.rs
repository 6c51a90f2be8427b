//! pratilipi-core: Upload/translate form logic (sans-IO).
//!
//! Models the PDF translation widget: file selection, the Hindi/English
//! language pair, validation, the single outbound request and how its
//! reply is interpreted.
//!
//! This crate has **no I/O dependencies**. Sending requests and saving
//! downloads happen behind the [`Transport`] and [`DownloadSink`]
//! traits, implemented in `pratilipi-io` for the browser and in
//! `pratilipi-cli` for the terminal.

pub mod config;
pub mod error;
pub mod file;
pub mod form;
pub mod language;
pub mod submit;
pub mod wire;

pub use config::{API_URL_ENV, ApiConfig, ConfigError, DEFAULT_API_BASE};
pub use error::{
    GENERIC_DOWNLOAD_MESSAGE, GENERIC_SERVER_MESSAGE, GENERIC_TRANSPORT_MESSAGE, SubmitError,
    ValidationError,
};
pub use file::{FileCandidate, PDF_MEDIA_TYPE, SelectedFile};
pub use form::{Rejection, UploadForm};
pub use language::{Language, LanguagePair, ParseLanguageError};
pub use submit::{
    DownloadSink, FormCell, ServiceStatus, Submission, Transport, check_health, submit,
};
pub use wire::{Download, HealthReply, ServiceReply, TranslationRequest, error_detail};
