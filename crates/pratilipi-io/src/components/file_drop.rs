//! PDF drop zone with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileCheck, LdFileText};
use pratilipi_core::{FileCandidate, PDF_MEDIA_TYPE, SelectedFile};

/// Props for the [`FileDrop`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileDropProps {
    /// The file currently selected, shown in place of the prompt.
    selected: Option<SelectedFile>,
    /// Whether a drag is hovering over the zone.
    dragging: bool,
    /// Remounts the hidden file input when it changes.
    picker_epoch: u32,
    /// Called with the first file offered, PDF or not.
    on_file: EventHandler<FileCandidate>,
    /// Called when a drag enters (`true`) or leaves (`false`) the zone,
    /// only when that differs from `dragging`.
    on_drag: EventHandler<bool>,
    /// Called when "Remove file" is clicked.
    on_clear: EventHandler<()>,
    /// Called when a file could not be read.
    on_read_error: EventHandler<String>,
}

/// A dashed drop zone with a "Click to upload" picker.
///
/// Offers the first file of a drop or pick to `on_file`. Files whose
/// declared type is not PDF are passed on without reading their
/// contents; the form rejects them on type alone.
#[component]
pub fn FileDrop(props: FileDropProps) -> Element {
    let on_file = props.on_file;
    let on_drag = props.on_drag;
    let on_clear = props.on_clear;
    let on_read_error = props.on_read_error;

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let name = file.name();
        let media_type = file.content_type();
        if media_type.as_deref() != Some(PDF_MEDIA_TYPE) {
            debug!(%name, ?media_type, "offered file is not a PDF");
            on_file.call(FileCandidate::new(name, media_type, Vec::new()));
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => on_file.call(FileCandidate::new(name, media_type, bytes.to_vec())),
            Err(e) => {
                warn!(%name, "failed to read file: {e}");
                on_read_error.call(format!("Failed to read file: {e}"));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        on_drag.call(false);
        process_files(evt.files()).await;
    };

    let dragging = props.dragging;
    let zone_class = if dragging {
        "drop-zone drop-zone--active"
    } else {
        "drop-zone"
    };
    let epoch = props.picker_epoch;

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                if !dragging {
                    on_drag.call(true);
                }
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                if dragging {
                    on_drag.call(false);
                }
            },
            ondrop: handle_drop,

            // Keys only apply to the root of an rsx block, so the input
            // gets its own block to be replaced when the epoch changes.
            {rsx! {
                input {
                    key: "{epoch}",
                    r#type: "file",
                    accept: ".pdf",
                    class: "hidden",
                    id: "pdf-upload",
                    onchange: handle_files,
                }
            }}

            if let Some(ref file) = props.selected {
                div { class: "drop-zone__body",
                    span { class: "drop-zone__icon drop-zone__icon--ok",
                        Icon { icon: LdFileCheck, width: 48, height: 48 }
                    }
                    p { class: "file-name", "{file.name()}" }
                    p { class: "file-size", "{file.size_label()}" }
                    button {
                        class: "link-danger",
                        r#type: "button",
                        onclick: move |_| on_clear.call(()),
                        "Remove file"
                    }
                }
            } else {
                div { class: "drop-zone__body",
                    span { class: "drop-zone__icon",
                        Icon { icon: LdFileText, width: 56, height: 56 }
                    }
                    p {
                        label { r#for: "pdf-upload", class: "link-primary", "Click to upload" }
                        span { class: "text-secondary", " or drag and drop" }
                    }
                    p { class: "text-muted", "PDF files only" }
                }
            }
        }
    }
}
