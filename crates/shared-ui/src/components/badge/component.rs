use dioxus::prelude::*;
use shared_types::OrganizationStatus;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Badge colour for an organization's approval status.
    pub fn for_status(status: OrganizationStatus) -> Self {
        match status {
            OrganizationStatus::Pending => BadgeVariant::Warning,
            OrganizationStatus::Approved => BadgeVariant::Success,
            OrganizationStatus::Rejected => BadgeVariant::Destructive,
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge showing an organization status with its matching colour.
#[component]
pub fn StatusBadge(status: OrganizationStatus) -> Element {
    rsx! {
        Badge { variant: BadgeVariant::for_status(status), "{status.label()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_variants() {
        assert_eq!(
            BadgeVariant::for_status(OrganizationStatus::Pending),
            BadgeVariant::Warning
        );
        assert_eq!(
            BadgeVariant::for_status(OrganizationStatus::Approved),
            BadgeVariant::Success
        );
        assert_eq!(
            BadgeVariant::for_status(OrganizationStatus::Rejected),
            BadgeVariant::Destructive
        );
    }

    #[test]
    fn status_badge_renders_label_and_style() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: OrganizationStatus::Pending }
        });
        assert!(html.contains("Pending"));
        assert!(html.contains("data-style=\"warning\""));
    }
}
