use dioxus::prelude::*;
use shared_types::{replace_status, AppError, Decision, Organization, OrganizationSummary};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, StatCard,
};

use super::table::{send_decision, OrganizationTable};
use crate::notify::use_notifier;
use crate::routes::Route;

/// Admin overview: headline counts and the full organization listing with
/// inline approve and reject.
#[component]
pub fn AdminDashboard() -> Element {
    let notifier = use_notifier();
    let loaded = use_server_future(|| server::api::list_organizations(None))?;

    let (initial, load_error) = match loaded.read().as_ref() {
        Some(Ok(list)) => (list.clone(), None),
        Some(Err(e)) => (Vec::new(), Some(AppError::friendly_message(&e.to_string()))),
        None => (Vec::new(), None),
    };

    // Local copy of the listing; decisions patch it in place.
    let mut organizations = use_signal(move || initial);
    let mut busy = use_signal(|| Option::<String>::None);

    let summary = use_memo(move || OrganizationSummary::from_records(&organizations.read()));

    let on_decide = move |(id, decision): (String, Decision)| {
        spawn(async move {
            busy.set(Some(id.clone()));
            if let Some(updated) = send_decision(id, decision, notifier).await {
                replace_status(&mut organizations.write(), &updated.id, updated.status);
            }
            busy.set(None);
        });
    };

    let counts = summary();
    let rows: Vec<Organization> = organizations.read().clone();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Admin Dashboard" }
            }

            div { class: "stat-grid",
                StatCard { title: "Total Organizations", value: counts.total }
                StatCard {
                    title: "Pending Approval",
                    value: counts.pending,
                    hint: "Awaiting review".to_string(),
                }
                StatCard { title: "Approved", value: counts.approved }
            }

            Card {
                CardHeader {
                    PageHeader {
                        div {
                            CardTitle { "Organizations" }
                            CardDescription { "Review and manage partner organizations" }
                        }
                        PageActions {
                            Link { to: Route::AdminOrganizations {},
                                Button { variant: ButtonVariant::Outline, "View All Organizations" }
                            }
                        }
                    }
                }
                CardContent {
                    if let Some(err) = load_error {
                        div { class: "admin-error", role: "alert", "{err}" }
                    } else {
                        OrganizationTable {
                            organizations: rows,
                            busy: busy(),
                            on_decide,
                        }
                    }
                }
            }
        }
    }
}
