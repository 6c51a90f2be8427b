//! Error types for the upload form.
//!
//! `Display` on [`ValidationError`] is the exact text shown to the user.
//! [`SubmitError::user_message`] maps every failure to the inline
//! message the form displays.

/// Shown when the service rejects a request without a usable `detail`.
pub const GENERIC_SERVER_MESSAGE: &str = "Translation failed";

/// Shown for network failures and replies that cannot be interpreted.
pub const GENERIC_TRANSPORT_MESSAGE: &str = "An error occurred during translation";

/// Shown when the translated document could not be saved.
pub const GENERIC_DOWNLOAD_MESSAGE: &str = "Download failed";

/// Input problems caught before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The offered file's declared media type is not PDF.
    #[error("Please select a PDF file")]
    NotPdf,

    /// Submit was pressed with no file selected.
    #[error("Please select a PDF file first")]
    NoFile,

    /// Source and target language are the same.
    #[error("Source and target languages must be different")]
    SameLanguage,
}

/// Why a submission attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Client-side validation failed; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("server responded {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// The service's `detail` text, or [`GENERIC_SERVER_MESSAGE`].
        message: String,
    },

    /// The request could not be completed or the reply was unreadable.
    #[error("transport error: {0}")]
    Transport(String),

    /// The translated document arrived but could not be saved.
    #[error("download failed: {0}")]
    Download(String),
}

impl SubmitError {
    /// Text for the form's inline error box.
    ///
    /// Transport and download failures collapse to fixed messages; the
    /// underlying cause is only available through `Display`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Server { message, .. } => message.clone(),
            Self::Transport(_) => GENERIC_TRANSPORT_MESSAGE.to_owned(),
            Self::Download(_) => GENERIC_DOWNLOAD_MESSAGE.to_owned(),
        }
    }
}
