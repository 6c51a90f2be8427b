//! "From" / "To" language selects with a swap button.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdArrowLeftRight;
use pratilipi_core::{Language, LanguagePair};

/// Props for the [`LanguagePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LanguagePickerProps {
    /// Current pair.
    languages: LanguagePair,
    /// Called when the "From" select changes.
    on_source: EventHandler<Language>,
    /// Called when the "To" select changes.
    on_target: EventHandler<Language>,
    /// Called when the swap button is clicked.
    on_swap: EventHandler<()>,
}

/// Source and target selects side by side, swap button between them.
///
/// The "From" list starts with Hindi and the "To" list with English.
#[component]
pub fn LanguagePicker(props: LanguagePickerProps) -> Element {
    let on_source = props.on_source;
    let on_target = props.on_target;
    let on_swap = props.on_swap;

    rsx! {
        div { class: "language-row",
            {render_select("source-lang", "From", &Language::ALL, props.languages.source, move |l| on_source.call(l))}

            button {
                class: "swap-button",
                r#type: "button",
                title: "Swap languages",
                aria_label: "Swap languages",
                onclick: move |_| on_swap.call(()),
                Icon { icon: LdArrowLeftRight, width: 24, height: 24 }
            }

            {render_select("target-lang", "To", &[Language::English, Language::Hindi], props.languages.target, move |l| on_target.call(l))}
        }
    }
}

/// Render a labeled language select.
fn render_select(
    id: &str,
    label: &str,
    options: &[Language],
    selected: Language,
    on_change: impl Fn(Language) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let options = options.to_vec();

    rsx! {
        div { class: "language-field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            select {
                id: "{id}",
                class: "field-select",
                value: "{selected.code()}",
                onchange: move |e| {
                    match e.value().parse::<Language>() {
                        Ok(language) => on_change(language),
                        Err(err) => warn!("language select: {err}"),
                    }
                },

                for language in options {
                    option {
                        value: "{language.code()}",
                        selected: language == selected,
                        "{language.label()}"
                    }
                }
            }
        }
    }
}
