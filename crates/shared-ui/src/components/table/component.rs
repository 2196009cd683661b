use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn Table(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "table", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "table-scroll",
            table {
                ..merged,
                {children}
            }
        }
    }
}

/// Header row. Children are `TableHeaderCell`s.
#[component]
pub fn TableHead(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn TableHeaderCell(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

#[component]
pub fn TableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn TableRow(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "table-row", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        tr {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TableCell(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        td {
            ..attributes,
            {children}
        }
    }
}

/// A single full-width row shown when the table has no records.
#[component]
pub fn TableEmpty(columns: usize, message: String) -> Element {
    rsx! {
        tr { class: "table-empty",
            td { colspan: "{columns}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_spans_every_column() {
        let html = dioxus_ssr::render_element(rsx! {
            Table {
                TableBody {
                    TableEmpty { columns: 6, message: "No organizations found" }
                }
            }
        });
        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("No organizations found"));
    }

    #[test]
    fn header_cells_are_column_scoped() {
        let html = dioxus_ssr::render_element(rsx! {
            Table {
                TableHead {
                    TableHeaderCell { "Name" }
                    TableHeaderCell { "Status" }
                }
            }
        });
        assert_eq!(html.matches("scope=\"col\"").count(), 2);
    }
}
