use dioxus::prelude::*;

/// Animated loading indicator with an optional caption.
#[component]
pub fn Spinner(
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "spinner-ring" }
            if let Some(label) = label {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

/// Full-height centered spinner used while a page resolves its session.
#[component]
pub fn PageLoader() -> Element {
    rsx! {
        div { class: "page-loader",
            Spinner {}
        }
    }
}
