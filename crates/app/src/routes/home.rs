use dioxus::prelude::*;
use shared_types::{landing_path, Navigator as _};
use shared_ui::PageLoader;

use crate::guard::{use_sessions, RouterNavigator};

/// Landing page: sends a signed-in session to its role's dashboard and
/// everyone else to login.
#[component]
pub fn Home() -> Element {
    let sessions = use_sessions();
    let target = use_server_future(move || {
        let sessions = sessions.clone();
        async move { landing_path(sessions.provider()).await.to_string() }
    })?;

    let nav = RouterNavigator::current();
    use_effect(move || {
        if let Some(path) = target.read().as_ref() {
            nav.go_to(path);
        }
    });

    rsx! { PageLoader {} }
}
