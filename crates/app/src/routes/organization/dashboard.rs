use dioxus::prelude::*;
use shared_types::{Organization, OrganizationStatus};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle, StatusBadge,
};

use super::{load_error_message, use_my_organization};
use crate::guard::use_session_user;
use crate::routes::Route;

#[component]
pub fn OrganizationDashboard() -> Element {
    let user = use_session_user();
    let record = use_my_organization()?;

    let body = match &*record.read() {
        Some(Ok(Some(org))) => rsx! { StatusCard { org: org.clone() } },
        Some(Ok(None)) => rsx! {
            Card {
                CardContent {
                    p { "No organization is registered for {user.email}." }
                }
            }
        },
        Some(Err(e)) => {
            let message = load_error_message(e);
            rsx! { div { class: "organization-error", role: "alert", "{message}" } }
        }
        None => rsx! {},
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Welcome, {user.name}" }
            }
            {body}
            div { class: "organization-shortcuts",
                Link { to: Route::OrganizationCases {}, class: "organization-shortcut",
                    span { class: "organization-shortcut-title", "Cases" }
                    span { "Client matters assigned to your organization" }
                }
                Link { to: Route::OrganizationProfile {}, class: "organization-shortcut",
                    span { class: "organization-shortcut-title", "Organization Profile" }
                    span { "Contact details and specialties shown to clients" }
                }
            }
        }
    }
}

#[component]
fn StatusCard(org: Organization) -> Element {
    let message = status_message(org.status);
    rsx! {
        Card { class: "organization-status-card",
            CardHeader {
                CardTitle { "{org.name}" }
                CardDescription { "Partner status" }
            }
            CardContent {
                div { class: "organization-status-line",
                    StatusBadge { status: org.status }
                    span { "{message}" }
                }
            }
        }
    }
}

fn status_message(status: OrganizationStatus) -> &'static str {
    match status {
        OrganizationStatus::Pending => {
            "Your organization is awaiting admin approval. You will be listed for clients once it is approved."
        }
        OrganizationStatus::Approved => "Your organization is approved and visible to clients.",
        OrganizationStatus::Rejected => {
            "Your organization was not approved. Contact Ushuari support to appeal the decision."
        }
    }
}
