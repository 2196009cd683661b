use dioxus::prelude::*;
use shared_types::{AppErrorKind, Decision, Organization};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList,
    PageActions, PageHeader, PageTitle, StatusBadge,
};

use super::table::send_decision;
use crate::format_helpers::{format_date_human, format_specialties};
use crate::guard::app_error;
use crate::notify::use_notifier;
use crate::routes::Route;

#[component]
pub fn AdminOrganizationDetail(id: String) -> Element {
    let loaded = use_server_future(move || server::api::get_organization(id.clone()))?;

    let result = loaded.read().as_ref().cloned();
    match result {
        Some(Ok(org)) => rsx! { OrganizationDetail { initial: org } },
        Some(Err(e)) => {
            let err = app_error(e);
            let message = if err.kind == AppErrorKind::NotFound {
                "Organization not found.".to_string()
            } else {
                err.message
            };
            rsx! {
                div { class: "container",
                    Card {
                        CardContent {
                            p { class: "admin-error", role: "alert", "{message}" }
                            Link { to: Route::AdminOrganizations {}, "Back to organizations" }
                        }
                    }
                }
            }
        }
        None => rsx! {},
    }
}

#[component]
fn OrganizationDetail(initial: Organization) -> Element {
    let notifier = use_notifier();
    let mut org = use_signal(move || initial);
    let mut busy = use_signal(|| false);

    let decide = move |decision: Decision| {
        let id = org.read().id.clone();
        spawn(async move {
            busy.set(true);
            if let Some(updated) = send_decision(id, decision, notifier).await {
                org.set(updated);
            }
            busy.set(false);
        });
    };

    let current = org();
    let joined = format_date_human(&current.created_at);
    let specialties = format_specialties(&current.specialties);

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{current.name}" }
                PageActions {
                    StatusBadge { status: current.status }
                    if current.is_pending() {
                        Button {
                            variant: ButtonVariant::Success,
                            disabled: busy(),
                            onclick: move |_| decide(Decision::Approve),
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: busy(),
                            onclick: move |_| decide(Decision::Reject),
                            "Reject"
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Details" }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: "Contact Person", "{current.contact_person}" }
                        DetailItem { label: "Email", "{current.email}" }
                        DetailItem { label: "Description", "{current.description}" }
                        DetailItem { label: "Specialties", "{specialties}" }
                        DetailItem { label: "Date Joined", "{joined}" }
                    }
                }
            }

            Link { to: Route::AdminOrganizations {}, class: "admin-back-link", "Back to organizations" }
        }
    }
}
