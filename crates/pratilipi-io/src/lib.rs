//! pratilipi-io: Browser I/O and Dioxus component library.
//!
//! Sends translation requests with `fetch`, saves replies through Blob
//! downloads, and provides the upload widget and its parts for the
//! pratilipi web application.

pub mod components;
pub mod download;
pub mod fetch;
pub mod signal_form;

pub use components::{FileDrop, LanguagePicker, StatusBadge, UploadWidget};
pub use download::{BrowserDownloads, DownloadError};
pub use fetch::{FetchError, FetchTransport};
pub use signal_form::SignalForm;
