//! State of the upload/translate widget.
//!
//! [`UploadForm`] holds everything the widget shows: the selected file,
//! the language pair, drag and busy flags, and the last error. All
//! mutation goes through the methods here, so the rules (PDF only,
//! distinct languages, one request at a time) hold regardless of which
//! UI drives the form.
//!
//! A submission moves through `idle → submitting → idle`:
//! [`begin_submit`](UploadForm::begin_submit) validates and raises the
//! busy flag, [`complete`](UploadForm::complete) lowers it and applies
//! the outcome.

use crate::config::ApiConfig;
use crate::error::{SubmitError, ValidationError};
use crate::file::{FileCandidate, SelectedFile};
use crate::language::{Language, LanguagePair};
use crate::wire::TranslationRequest;

/// Why [`UploadForm::begin_submit`] did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A submission is already running. The form is untouched.
    InFlight,
    /// Validation failed; the error is now shown on the form.
    Invalid(ValidationError),
}

/// The widget's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    selected: Option<SelectedFile>,
    languages: LanguagePair,
    dragging: bool,
    submitting: bool,
    error: Option<String>,
    picker_epoch: u32,
}

impl UploadForm {
    /// A fresh form: no file, Hindi to English.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected PDF, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Current language pair.
    #[must_use]
    pub const fn languages(&self) -> LanguagePair {
        self.languages
    }

    /// Whether a drag is hovering over the drop zone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message for the inline error box, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Changes whenever the file picker must be reset.
    ///
    /// UIs key the hidden `<input type="file">` on this so picking the
    /// same file again after a reset still fires a change event.
    #[must_use]
    pub const fn picker_epoch(&self) -> u32 {
        self.picker_epoch
    }

    /// Whether the translate button should be enabled.
    ///
    /// Identical languages do not disable it; they are reported on click.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.submitting
    }

    /// Offer a file to the form.
    ///
    /// A PDF replaces any previous selection and clears the error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPdf`] if the declared media type is
    /// not `application/pdf`. The error is also shown on the form and
    /// the previous selection is kept.
    pub fn select_file(&mut self, candidate: FileCandidate) -> Result<(), ValidationError> {
        if !candidate.is_pdf() {
            self.error = Some(ValidationError::NotPdf.to_string());
            return Err(ValidationError::NotPdf);
        }
        self.selected = Some(SelectedFile::from_candidate(candidate));
        self.error = None;
        Ok(())
    }

    /// Show `message` in the error box, replacing any previous one.
    ///
    /// For failures outside the form's own rules, such as a file that
    /// could not be read.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Drop the selected file ("Remove file").
    pub fn clear_file(&mut self) {
        self.selected = None;
        self.picker_epoch = self.picker_epoch.wrapping_add(1);
    }

    /// Set the source language.
    pub const fn set_source(&mut self, language: Language) {
        self.languages.source = language;
    }

    /// Set the target language.
    pub const fn set_target(&mut self, language: Language) {
        self.languages.target = language;
    }

    /// Exchange source and target.
    pub const fn swap(&mut self) {
        self.languages = self.languages.swapped();
    }

    /// Track drag-over / drag-leave on the drop zone.
    pub const fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Validate the form and, if it is ready, enter the submitting state.
    ///
    /// On success the busy flag is raised, the previous error cleared,
    /// and the request to send is returned.
    ///
    /// # Errors
    ///
    /// - [`Rejection::InFlight`] while a submission is running; nothing
    ///   changes.
    /// - [`Rejection::Invalid`] with [`ValidationError::NoFile`] or
    ///   [`ValidationError::SameLanguage`]; the message is shown.
    pub fn begin_submit(&mut self, config: &ApiConfig) -> Result<TranslationRequest, Rejection> {
        if self.submitting {
            return Err(Rejection::InFlight);
        }
        let validated = match &self.selected {
            None => Err(ValidationError::NoFile),
            Some(_) if !self.languages.is_distinct() => Err(ValidationError::SameLanguage),
            Some(file) => Ok(TranslationRequest {
                url: config.translate_url(),
                file_name: file.name().to_owned(),
                bytes: file.bytes().clone(),
                languages: self.languages,
            }),
        };
        match validated {
            Ok(request) => {
                self.submitting = true;
                self.error = None;
                Ok(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(Rejection::Invalid(e))
            }
        }
    }

    /// Leave the submitting state and apply the outcome.
    ///
    /// Success clears the selected file and resets the picker; failure
    /// replaces the error message. The language pair is kept either way.
    pub fn complete<T>(&mut self, outcome: &Result<T, SubmitError>) {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.selected = None;
                self.error = None;
                self.picker_epoch = self.picker_epoch.wrapping_add(1);
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}
