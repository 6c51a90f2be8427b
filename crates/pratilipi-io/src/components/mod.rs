//! Dioxus UI components for pratilipi.
//!
//! Provides the PDF drop zone, the language picker, the service status
//! badge, and the upload widget that combines them.

mod file_drop;
mod language_picker;
mod status_badge;
mod upload_widget;

pub use file_drop::FileDrop;
pub use language_picker::LanguagePicker;
pub use status_badge::StatusBadge;
pub use upload_widget::UploadWidget;
