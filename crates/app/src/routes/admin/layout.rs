use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::auth::use_auth;
use crate::guard::{logout, use_session_user, use_sessions, RouterNavigator};
use crate::routes::Route;

/// Admin console chrome: brand, section links, and the signed-in account.
#[component]
pub fn AdminLayout() -> Element {
    let route: Route = use_route();
    let user = use_session_user();
    let auth = use_auth();
    let sessions = use_sessions();
    let nav = RouterNavigator::current();

    let dashboard_class = nav_class(matches!(route, Route::AdminDashboard {}));
    let organizations_class = nav_class(matches!(
        route,
        Route::AdminOrganizations {} | Route::AdminOrganizationDetail { .. }
    ));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-shell",
            header { class: "admin-topbar",
                div { class: "admin-brand",
                    span { class: "admin-brand-name", "{shared_types::BRAND}" }
                    span { class: "admin-brand-tag", "Admin" }
                }

                nav { class: "admin-nav",
                    Link {
                        to: Route::AdminDashboard {},
                        class: dashboard_class,
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::AdminOrganizations {},
                        class: organizations_class,
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        "Organizations"
                    }
                }

                div { class: "admin-account",
                    span { class: "admin-account-name", "{user.name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            spawn(logout(auth, sessions.clone(), nav));
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "admin-nav-link active"
    } else {
        "admin-nav-link"
    }
}
