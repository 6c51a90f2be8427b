//! Badge showing whether the translation service answers.

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use pratilipi_core::{ApiConfig, ServiceStatus, check_health};

use crate::fetch::FetchTransport;

/// Probes `GET /health` once on mount and shows the result.
#[component]
pub fn StatusBadge(config: ApiConfig) -> Element {
    let mut status = use_signal(ServiceStatus::default);

    let probe_config = config.clone();
    use_hook(move || {
        spawn(async move {
            let result = check_health(&probe_config, &FetchTransport).await;
            info!(base_url = probe_config.base_url(), ?result, "service health probed");
            status.set(result);
        })
    });

    let modifier = match status() {
        ServiceStatus::Checking => "status--checking",
        ServiceStatus::Online => "status--online",
        ServiceStatus::Offline => "status--offline",
    };

    rsx! {
        span { class: "status {modifier}", title: "{config.base_url()}",
            span { class: "status__dot" }
            "{status().label()}"
        }
    }
}
