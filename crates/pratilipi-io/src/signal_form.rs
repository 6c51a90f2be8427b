//! Bridge between the reactive form state and the core submit flow.

use dioxus::prelude::*;
use pratilipi_core::{FormCell, UploadForm};

/// An [`UploadForm`] living in a Dioxus signal.
///
/// Every [`update`](FormCell::update) is one signal write, so each step
/// of a submission re-renders the widget.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalForm(pub Signal<UploadForm>);

impl SignalForm {
    /// Set the drag flag, writing the signal only when the flag changes.
    ///
    /// Drag events repeat while the pointer moves; unchanged ones must
    /// not re-render the widget.
    pub fn set_dragging(self, dragging: bool) {
        let mut signal = self.0;
        if signal.peek().is_dragging() != dragging {
            signal.write().set_dragging(dragging);
        }
    }
}

impl FormCell for SignalForm {
    fn update<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> R {
        let mut signal = self.0;
        f(&mut signal.write())
    }
}
