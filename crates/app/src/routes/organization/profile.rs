use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, PageHeader, PageTitle,
    StatusBadge,
};

use super::{load_error_message, use_my_organization};
use crate::format_helpers::{format_date_human, format_specialties};
use crate::guard::use_session_user;

#[component]
pub fn OrganizationProfile() -> Element {
    let user = use_session_user();
    let record = use_my_organization()?;

    let body = match &*record.read() {
        Some(Ok(Some(org))) => {
            let joined = format_date_human(&org.created_at);
            let specialties = format_specialties(&org.specialties);
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "{org.name}" }
                    }
                    CardContent {
                        DetailList {
                            DetailItem { label: "Status", StatusBadge { status: org.status } }
                            DetailItem { label: "Contact Person", "{org.contact_person}" }
                            DetailItem { label: "Email", "{org.email}" }
                            DetailItem { label: "Description", "{org.description}" }
                            DetailItem { label: "Specialties", "{specialties}" }
                            DetailItem { label: "Member Since", "{joined}" }
                        }
                    }
                }
            }
        }
        Some(Ok(None)) => rsx! {
            Card {
                CardContent {
                    p { "No organization profile is registered for {user.email}." }
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
                PageTitle { "Organization Profile" }
            }
            {body}
        }
    }
}
