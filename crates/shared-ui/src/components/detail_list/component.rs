use dioxus::prelude::*;

/// Label/value rows for a record detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row of a `DetailList`. Pass rich content (badges, lists) as children.
#[component]
pub fn DetailItem(label: String, children: Element) -> Element {
    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", {children} }
        }
    }
}
