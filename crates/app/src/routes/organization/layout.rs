use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLayoutDashboard, LdLogOut, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{active_item, NavItem, BRAND, ORGANIZATION_NAV};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger,
};

use crate::auth::use_auth;
use crate::guard::{logout, use_session_user, use_sessions, RouterNavigator};
use crate::routes::Route;

/// Organization console chrome: a collapsible sidebar with the section links
/// and a top bar showing the signed-in account.
///
/// Sidebar visibility is local UI state. Toggling it re-renders this layout
/// only; the guard above it has already settled.
#[component]
pub fn OrganizationLayout() -> Element {
    let route: Route = use_route();
    let user = use_session_user();
    let auth = use_auth();
    let sessions = use_sessions();
    let nav = RouterNavigator::current();

    let current_path = route.to_string();
    let active = active_item(&current_path).map(|item| item.path);
    let initial = user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let links = ORGANIZATION_NAV
        .iter()
        .filter_map(|item| item.path.parse::<Route>().ok().map(|to| (item, to)));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./organization.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "{BRAND}" }
                        span { class: "sidebar-brand-subtitle", "Organization Dashboard" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for (item, to) in links {
                            SidebarMenuItem { key: "{item.path}",
                                Link { to,
                                    SidebarMenuButton { active: active == Some(item.path),
                                        NavIcon { item: *item }
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        class: "sidebar-logout",
                        onclick: move |_| {
                            spawn(logout(auth, sessions.clone(), nav));
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "organization-topbar",
                    SidebarTrigger {}
                    div { class: "organization-topbar-spacer" }
                    span { class: "organization-user-name", "{user.name}" }
                    div { class: "organization-avatar", "aria-hidden": "true", "{initial}" }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item.path {
        "/organization/dashboard" => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        "/organization/cases" => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        _ => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
    }
}
