//! The upload/translate widget.
//!
//! Owns the [`UploadForm`] signal and wires the drop zone, language
//! picker, error box and translate button to it. Submissions run as a
//! spawned task through [`pratilipi_core::submit`]; the form's busy
//! flag disables the button until the task finishes.

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use pratilipi_core::{ApiConfig, Submission, UploadForm, submit};

use crate::components::{FileDrop, LanguagePicker};
use crate::download::BrowserDownloads;
use crate::fetch::FetchTransport;
use crate::signal_form::SignalForm;

/// File drop zone, language selects and translate button.
///
/// `config` decides where requests go; it is read on each click.
#[component]
pub fn UploadWidget(config: ApiConfig) -> Element {
    let mut form = use_signal(UploadForm::new);

    let on_translate = move |_| {
        let config = config.clone();
        spawn(async move {
            match submit(&SignalForm(form), &config, &FetchTransport, &BrowserDownloads).await {
                Submission::Finished(Ok(file_name)) => info!(%file_name, "translated PDF downloaded"),
                Submission::Finished(Err(e)) => warn!("translation failed: {e}"),
                Submission::Rejected(rejection) => debug!(?rejection, "submit rejected"),
            }
        });
    };

    let state = form();

    rsx! {
        div { class: "card",
            FileDrop {
                selected: state.selected().cloned(),
                dragging: state.is_dragging(),
                picker_epoch: state.picker_epoch(),
                on_file: move |candidate| {
                    if let Err(e) = form.write().select_file(candidate) {
                        debug!("file rejected: {e}");
                    }
                },
                on_drag: move |dragging| SignalForm(form).set_dragging(dragging),
                on_clear: move |()| form.write().clear_file(),
                on_read_error: move |message: String| form.write().set_error(message),
            }

            div { class: "controls",
                LanguagePicker {
                    languages: state.languages(),
                    on_source: move |language| form.write().set_source(language),
                    on_target: move |language| form.write().set_target(language),
                    on_swap: move |()| form.write().swap(),
                }

                if let Some(err) = state.error() {
                    div { class: "error-box", role: "alert",
                        p { "{err}" }
                    }
                }

                button {
                    class: "translate-button",
                    r#type: "button",
                    disabled: !state.can_submit(),
                    onclick: on_translate,
                    if state.is_submitting() {
                        span { class: "busy",
                            span { class: "spinner" }
                            "Translating..."
                        }
                    } else {
                        "Translate PDF"
                    }
                }

                p { class: "hint",
                    "Translation may take a few moments depending on the file size"
                }
            }
        }
    }
}
