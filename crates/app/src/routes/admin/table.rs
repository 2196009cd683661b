use dioxus::prelude::*;
use shared_types::{Decision, Organization};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, StatusBadge, Table, TableBody, TableCell, TableEmpty,
    TableHead, TableHeaderCell, TableRow,
};

use crate::format_helpers::format_date_human;
use crate::notify::Notifier;
use crate::routes::Route;

const COLUMNS: usize = 5;

/// Send an admin decision to the server.
///
/// Returns the record as stored after the decision, or `None` when the call
/// failed (the failure has already been reported to the user).
pub(super) async fn send_decision(
    id: String,
    decision: Decision,
    notifier: Notifier,
) -> Option<Organization> {
    let result = match decision {
        Decision::Approve => server::api::approve_organization(id).await,
        Decision::Reject => server::api::reject_organization(id).await,
    };

    match result {
        Ok(updated) => {
            notifier.success(format!("Organization {}", updated.status));
            Some(updated)
        }
        Err(e) => {
            notifier.server_error(&e);
            None
        }
    }
}

/// Organization listing shared by the dashboard and the organizations page.
///
/// Approve and reject are offered only for pending rows. `busy` names the row
/// whose decision is in flight; its buttons are disabled until it settles.
#[component]
pub(super) fn OrganizationTable(
    organizations: Vec<Organization>,
    #[props(default)] busy: Option<String>,
    on_decide: EventHandler<(String, Decision)>,
) -> Element {
    rsx! {
        Table { class: "organization-table",
            TableHead {
                TableHeaderCell { "Organization" }
                TableHeaderCell { "Contact" }
                TableHeaderCell { "Status" }
                TableHeaderCell { "Date Joined" }
                TableHeaderCell { "Actions" }
            }
            TableBody {
                if organizations.is_empty() {
                    TableEmpty { columns: COLUMNS, message: "No organizations found." }
                }
                for org in organizations {
                    OrganizationRow {
                        key: "{org.id}",
                        busy: busy.as_deref() == Some(org.id.as_str()),
                        org,
                        on_decide,
                    }
                }
            }
        }
    }
}

#[component]
fn OrganizationRow(
    org: Organization,
    busy: bool,
    on_decide: EventHandler<(String, Decision)>,
) -> Element {
    let approve_id = org.id.clone();
    let reject_id = org.id.clone();
    let joined = format_date_human(&org.created_at);

    rsx! {
        TableRow {
            TableCell {
                div { class: "organization-name", "{org.name}" }
                div { class: "organization-description", "{org.description}" }
            }
            TableCell {
                div { "{org.contact_person}" }
                div { class: "organization-email", "{org.email}" }
            }
            TableCell {
                StatusBadge { status: org.status }
            }
            TableCell { "{joined}" }
            TableCell { class: "organization-actions",
                Link {
                    to: Route::AdminOrganizationDetail { id: org.id.clone() },
                    class: "organization-view-link",
                    "View"
                }
                if org.is_pending() {
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Sm,
                        disabled: busy,
                        onclick: move |_| on_decide.call((approve_id.clone(), Decision::Approve)),
                        "Approve"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        size: ButtonSize::Sm,
                        disabled: busy,
                        onclick: move |_| on_decide.call((reject_id.clone(), Decision::Reject)),
                        "Reject"
                    }
                }
            }
        }
    }
}
