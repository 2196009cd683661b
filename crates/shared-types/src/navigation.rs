use serde::{Deserialize, Serialize};

/// Brand shown at the top of every console sidebar.
pub const BRAND: &str = "Ushuari";

/// A sidebar link in the organization console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar links for the organization console, in display order.
pub const ORGANIZATION_NAV: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        path: "/organization/dashboard",
    },
    NavItem {
        label: "Cases",
        path: "/organization/cases",
    },
    NavItem {
        label: "Organization Profile",
        path: "/organization/profile",
    },
];

/// The nav item whose path is the current location, if any.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    let trimmed = current_path.trim_end_matches('/');
    ORGANIZATION_NAV.iter().find(|item| item.path == trimmed)
}

/// Local sidebar visibility. Pure UI state: it never touches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_nav_order() {
        let labels: Vec<&str> = ORGANIZATION_NAV.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Cases", "Organization Profile"]);
        assert!(ORGANIZATION_NAV
            .iter()
            .all(|i| i.path.starts_with("/organization/")));
    }

    #[test]
    fn active_item_ignores_trailing_slash() {
        assert_eq!(active_item("/organization/cases/").map(|i| i.label), Some("Cases"));
        assert!(active_item("/admin/dashboard").is_none());
    }

    #[test]
    fn sidebar_starts_open_and_toggles() {
        let mut sidebar = SidebarState::default();
        assert!(sidebar.open);
        sidebar.toggle();
        assert!(!sidebar.open);
        sidebar.toggle();
        assert!(sidebar.open);
    }
}
