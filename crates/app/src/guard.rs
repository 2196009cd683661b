//! Client side of the route guard: the session and navigation adapters and
//! the `RoleGate` component wrapping each protected route group.

use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{
    settle, AppError, GuardState, Navigator as GuardNavigator, Role, RouteGuard, SessionProvider,
    SessionUser,
};
use std::rc::Rc;
use shared_ui::PageLoader;

use crate::auth::{use_auth, AuthState};
use crate::routes::Route;

/// Recover the structured error carried inside a `ServerFnError`.
pub fn app_error(err: ServerFnError) -> AppError {
    let raw = err.to_string();
    AppError::from_server_error(&raw).unwrap_or_else(|| AppError::internal(raw))
}

/// Session store backed by the session server functions.
pub struct ServerSessions;

#[async_trait(?Send)]
impl SessionProvider for ServerSessions {
    async fn resolve(&self) -> Result<Option<SessionUser>, AppError> {
        server::api::get_current_user().await.map_err(app_error)
    }

    async fn end_session(&self) -> Result<(), AppError> {
        server::api::logout().await.map_err(app_error)
    }
}

/// Session store handed to the guard, the landing page and logout through
/// context. The app root provides [`ServerSessions`].
#[derive(Clone)]
pub struct Sessions(Rc<dyn SessionProvider>);

impl Sessions {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn server() -> Self {
        Self::new(ServerSessions)
    }

    pub fn provider(&self) -> &dyn SessionProvider {
        self.0.as_ref()
    }
}

pub fn use_sessions() -> Sessions {
    use_context::<Sessions>()
}

/// Router-backed navigation. Paths outside the route table are pushed as
/// external targets.
#[derive(Clone, Copy)]
pub struct RouterNavigator(pub Navigator);

impl RouterNavigator {
    pub fn current() -> Self {
        Self(navigator())
    }
}

impl GuardNavigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.0.push(route);
            }
            Err(_) => {
                self.0
                    .push(NavigationTarget::<Route>::External(path.to_string()));
            }
        }
    }
}

/// Gate `children` behind a session with exactly the `required` role.
///
/// The session is resolved once when the gate mounts. During SSR the
/// component suspends until resolution completes; the client mirror update
/// and the redirect, if any, happen in an effect on the client. Signals
/// written by the page (sidebar, table rows) are never read here, so they
/// cannot re-run the guard.
#[component]
pub fn RoleGate(required: Role, children: Element) -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();

    let resolution = use_server_future(move || {
        let sessions = sessions.clone();
        async move { RouteGuard::new(required).resolve(sessions.provider()).await }
    })?;

    let nav = RouterNavigator::current();
    use_effect(move || {
        if let Some(state) = resolution.read().as_ref() {
            settle(state, &mut auth, &nav);
        }
    });

    let state = resolution.read().as_ref().cloned();
    match state {
        Some(GuardState::Rendered(user)) => rsx! {
            SessionScope { user, {children} }
        },
        _ => rsx! { PageLoader {} },
    }
}

/// Provides the guard's session to the page beneath it.
#[component]
fn SessionScope(user: SessionUser, children: Element) -> Element {
    use_context_provider(|| user.clone());
    rsx! { {children} }
}

/// Session of the enclosing `RoleGate`. Only call from guarded pages.
pub fn use_session_user() -> SessionUser {
    use_context::<SessionUser>()
}

/// End the session, clear local auth state, and return to login.
pub async fn logout(mut auth: AuthState, sessions: Sessions, nav: RouterNavigator) {
    auth.clear_auth();
    shared_types::sign_out(sessions.provider(), &nav).await;
}
