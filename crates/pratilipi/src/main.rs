use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use pratilipi_core::ApiConfig;
use pratilipi_io::{StatusBadge, UploadWidget};

/// Page styles, embedded so the app needs no static file server.
const STYLE: &str = include_str!("../assets/style.css");

/// Steps shown under "How it works": icon, title, text.
const STEPS: [(&str, &str, &str); 3] = [
    ("📄", "1. Upload PDF", "Upload your PDF file in Hindi or English"),
    ("🔄", "2. Select Languages", "Choose source and target languages"),
    ("⬇️", "3. Download", "Get your translated PDF with preserved format"),
];

fn main() {
    dioxus::launch(app);
}

/// Resolve the API base URL baked in at build time.
///
/// Falls back to the development default, with an error in the
/// console, if the baked-in value does not parse.
fn api_config() -> ApiConfig {
    let configured = option_env!("PRATILIPI_API_URL");
    ApiConfig::from_env_value(configured).unwrap_or_else(|e| {
        error!("ignoring PRATILIPI_API_URL: {e}");
        ApiConfig::default()
    })
}

/// Root application component: header, upload widget, explainer, footer.
fn app() -> Element {
    let config = use_hook(|| {
        let config = api_config();
        info!(base_url = config.base_url(), "translation service configured");
        config
    });

    rsx! {
        style { dangerous_inner_html: STYLE }

        div { class: "page",
            main { class: "container",
                header { class: "hero",
                    h1 { "PDF Translator" }
                    p { class: "tagline",
                        "Translate your PDFs between Hindi and English while preserving formatting"
                    }
                    StatusBadge { config: config.clone() }
                }

                UploadWidget { config: config.clone() }

                section { class: "how-it-works",
                    h2 { "How it works" }
                    div { class: "steps",
                        for (icon, title, text) in STEPS {
                            div { class: "step",
                                div { class: "step__icon", "{icon}" }
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            footer { class: "footer",
                p { "Built with Rust and Dioxus" }
            }
        }
    }
}
