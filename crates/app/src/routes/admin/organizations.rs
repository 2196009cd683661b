use dioxus::prelude::*;
use shared_types::{AppError, Decision, OrganizationStatus};
use shared_ui::{Card, CardContent, PageActions, PageHeader, PageLoader, PageTitle};

use super::table::{send_decision, OrganizationTable};
use crate::notify::use_notifier;

/// Full organization listing with a status filter. The filter is applied by
/// the server; after a decision the listing is fetched again so rows leave
/// a filtered view once their status changes.
#[component]
pub fn AdminOrganizations() -> Element {
    let notifier = use_notifier();
    let mut filter = use_signal(|| Option::<OrganizationStatus>::None);
    let mut busy = use_signal(|| Option::<String>::None);

    let mut listing = use_resource(move || {
        let status = filter();
        async move { server::api::list_organizations(status).await }
    });

    let on_decide = move |(id, decision): (String, Decision)| {
        spawn(async move {
            busy.set(Some(id.clone()));
            if send_decision(id, decision, notifier).await.is_some() {
                listing.restart();
            }
            busy.set(None);
        });
    };

    let selected = filter().map(|s| s.as_str()).unwrap_or("all");

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Organizations" }
                PageActions {
                    label { class: "status-filter",
                        span { "Status" }
                        select {
                            value: selected,
                            onchange: move |evt: FormEvent| {
                                filter.set(OrganizationStatus::parse(&evt.value()));
                            },
                            option { value: "all", "All" }
                            for status in OrganizationStatus::ALL {
                                option { value: status.as_str(), "{status.label()}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardContent {
                    match &*listing.read() {
                        Some(Ok(rows)) => rsx! {
                            OrganizationTable {
                                organizations: rows.clone(),
                                busy: busy(),
                                on_decide,
                            }
                        },
                        Some(Err(e)) => {
                            let message = AppError::friendly_message(&e.to_string());
                            rsx! { div { class: "admin-error", role: "alert", "{message}" } }
                        }
                        None => rsx! { PageLoader {} },
                    }
                }
            }
        }
    }
}
