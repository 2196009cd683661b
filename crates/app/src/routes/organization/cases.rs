use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, PageHeader, PageTitle, Table, TableBody, TableEmpty, TableHead,
    TableHeaderCell,
};

/// Case list for the organization. Matter assignment is not wired to a data
/// source yet, so the table renders its empty state.
#[component]
pub fn OrganizationCases() -> Element {
    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Cases" }
            }
            Card {
                CardContent {
                    Table {
                        TableHead {
                            TableHeaderCell { "Client" }
                            TableHeaderCell { "Matter" }
                            TableHeaderCell { "Status" }
                            TableHeaderCell { "Opened" }
                        }
                        TableBody {
                            TableEmpty { columns: 4usize, message: "No cases assigned yet." }
                        }
                    }
                }
            }
        }
    }
}
