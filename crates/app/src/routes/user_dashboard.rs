use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdScale};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageActions, PageHeader, PageTitle,
};

use crate::auth::use_auth;
use crate::guard::{logout, use_session_user, use_sessions, RouterNavigator};

/// Client home. Clients have no console sections of their own yet, so this
/// page carries its own sign-out control.
#[component]
pub fn UserDashboard() -> Element {
    let user = use_session_user();
    let auth = use_auth();
    let sessions = use_sessions();
    let nav = RouterNavigator::current();

    rsx! {
        div { class: "page-content",
            div { class: "container",
                PageHeader {
                    PageTitle { "Welcome, {user.name}" }
                    PageActions {
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            onclick: move |_| {
                                spawn(logout(auth, sessions.clone(), nav));
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdScale> { icon: LdScale, width: 20, height: 20 }
                            " Find legal help"
                        }
                        CardDescription { "Approved partner organizations on Ushuari" }
                    }
                    CardContent {
                        p {
                            "Partner organizations appear here once they are approved. "
                            "Contact one directly using the details on its listing."
                        }
                        p { class: "user-account-line", "Signed in as {user.email}" }
                    }
                }
            }
        }
    }
}
