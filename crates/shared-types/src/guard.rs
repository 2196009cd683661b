//! Route guard for protected console pages.
//!
//! Every protected page mounts one [`RouteGuard`] parameterized by the role
//! it requires. The guard resolves the session once, then either lets the
//! page render or redirects: to the login entry point when there is no valid
//! session, or to the session role's own dashboard when the role differs.
//!
//! Session resolution and navigation are injected through the
//! [`SessionProvider`] and [`Navigator`] traits so the guard can run against
//! fakes in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{AppError, Role, SessionUser, LOGIN_PATH};

/// Access to the current session. Runs on the client event loop, so the
/// returned futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Resolve or refresh the current session. `Ok(None)` means signed out.
    async fn resolve(&self) -> Result<Option<SessionUser>, AppError>;

    /// End the current session.
    async fn end_session(&self) -> Result<(), AppError>;
}

/// Fire-and-forget navigation.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Guard progress for a single page mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuardState {
    Pending,
    RedirectLogin,
    RedirectRoleHome(Role),
    Rendered(SessionUser),
}

impl GuardState {
    /// Where the guard sends the browser, if anywhere.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardState::RedirectLogin => Some(LOGIN_PATH),
            GuardState::RedirectRoleHome(role) => Some(role.home_path()),
            GuardState::Pending | GuardState::Rendered(_) => None,
        }
    }

    /// The session allowed to see the page, once rendered.
    pub fn session(&self) -> Option<&SessionUser> {
        match self {
            GuardState::Rendered(user) => Some(user),
            _ => None,
        }
    }

}

/// Decide the terminal state for a finished resolution.
///
/// Resolution errors are treated as "no valid session".
pub fn evaluate(required: Role, resolved: Result<Option<SessionUser>, AppError>) -> GuardState {
    match resolved {
        Ok(Some(user)) if user.role == required => GuardState::Rendered(user),
        Ok(Some(user)) => GuardState::RedirectRoleHome(user.role),
        Ok(None) => GuardState::RedirectLogin,
        Err(err) => {
            tracing::warn!(required = %required, error = %err, "Session resolution failed, sending to login");
            GuardState::RedirectLogin
        }
    }
}

/// Issue the navigation side effect for a terminal state, if it has one.
pub fn enforce<N: Navigator + ?Sized>(state: &GuardState, navigator: &N) {
    if let Some(target) = state.redirect_target() {
        navigator.go_to(target);
    }
}

/// Guard for one page mount, parameterized by the role the page requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    required: Role,
}

impl RouteGuard {
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    /// Resolve the session and compute the terminal state without
    /// navigating. Call once per mount; the caller keeps the result.
    pub async fn resolve<S: SessionProvider + ?Sized>(&self, sessions: &S) -> GuardState {
        evaluate(self.required, sessions.resolve().await)
    }
}

/// Client-side copy of the signed-in account.
pub trait SessionMirror {
    fn remember(&mut self, user: &SessionUser);
    fn forget(&mut self);
    fn remembered_role(&self) -> Option<Role>;
}

/// Apply a terminal state: keep the mirror in step with it, then navigate.
///
/// A login redirect always empties the mirror, otherwise the login page
/// would bounce a stale account back to its dashboard.
pub fn settle<M, N>(state: &GuardState, mirror: &mut M, navigator: &N)
where
    M: SessionMirror + ?Sized,
    N: Navigator + ?Sized,
{
    match state {
        GuardState::Rendered(user) => mirror.remember(user),
        GuardState::RedirectLogin => mirror.forget(),
        GuardState::Pending | GuardState::RedirectRoleHome(_) => {}
    }
    enforce(state, navigator);
}

/// Where the login page sends an already signed-in client, if anywhere.
pub fn signed_in_home<M: SessionMirror + ?Sized>(mirror: &M) -> Option<&'static str> {
    mirror.remembered_role().map(|role| role.home_path())
}

/// Destination for the landing page: the session's dashboard, or login.
pub async fn landing_path<S: SessionProvider + ?Sized>(sessions: &S) -> &'static str {
    match sessions.resolve().await {
        Ok(Some(user)) => user.role.home_path(),
        Ok(None) => LOGIN_PATH,
        Err(err) => {
            tracing::warn!(error = %err, "Session resolution failed on landing");
            LOGIN_PATH
        }
    }
}

/// End the session and return to login. The redirect happens even when the
/// session store reports an error, so the user is never left on a page that
/// looks signed in.
pub async fn sign_out<S, N>(sessions: &S, navigator: &N)
where
    S: SessionProvider + ?Sized,
    N: Navigator + ?Sized,
{
    if let Err(err) = sessions.end_session().await {
        tracing::warn!(error = %err, "Failed to end session cleanly");
    }
    navigator.go_to(LOGIN_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    /// Session store fake that counts resolutions.
    struct FakeSessions {
        outcome: Result<Option<SessionUser>, AppError>,
        resolves: Cell<usize>,
        ended: Cell<bool>,
        fail_end: bool,
    }

    impl FakeSessions {
        fn with(outcome: Result<Option<SessionUser>, AppError>) -> Self {
            Self {
                outcome,
                resolves: Cell::new(0),
                ended: Cell::new(false),
                fail_end: false,
            }
        }

        fn signed_in(role: Role) -> Self {
            Self::with(Ok(Some(user(role))))
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for FakeSessions {
        async fn resolve(&self) -> Result<Option<SessionUser>, AppError> {
            self.resolves.set(self.resolves.get() + 1);
            self.outcome.clone()
        }

        async fn end_session(&self) -> Result<(), AppError> {
            self.ended.set(true);
            if self.fail_end {
                Err(AppError::internal("store offline"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn go_to(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    impl RecordingNavigator {
        fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: format!("usr-{}", role.as_str()),
            name: "Jane Smith".to_string(),
            email: "jane@legalexperts.com".to_string(),
            role,
        }
    }

    #[derive(Default)]
    struct FakeMirror {
        user: Option<SessionUser>,
    }

    impl SessionMirror for FakeMirror {
        fn remember(&mut self, user: &SessionUser) {
            self.user = Some(user.clone());
        }

        fn forget(&mut self) {
            self.user = None;
        }

        fn remembered_role(&self) -> Option<Role> {
            self.user.as_ref().map(|u| u.role)
        }
    }

    /// What a protected layout does when it mounts.
    async fn mount(
        required: Role,
        sessions: &FakeSessions,
        nav: &RecordingNavigator,
        mirror: &mut FakeMirror,
    ) -> GuardState {
        let state = RouteGuard::new(required).resolve(sessions).await;
        settle(&state, mirror, nav);
        state
    }

    #[tokio::test]
    async fn wrong_role_redirects_to_that_roles_home() {
        for required in Role::ALL {
            for actual in Role::ALL.into_iter().filter(|r| *r != required) {
                let sessions = FakeSessions::signed_in(actual);
                let nav = RecordingNavigator::default();
                let mut mirror = FakeMirror::default();

                let state = mount(required, &sessions, &nav, &mut mirror).await;

                assert_eq!(state, GuardState::RedirectRoleHome(actual));
                assert_eq!(nav.visits(), vec![actual.home_path().to_string()]);
                assert_ne!(nav.visits()[0], required.home_path());
            }
        }
    }

    #[tokio::test]
    async fn missing_session_redirects_to_login() {
        for required in Role::ALL {
            let sessions = FakeSessions::with(Ok(None));
            let nav = RecordingNavigator::default();
            let mut mirror = FakeMirror::default();

            let state = mount(required, &sessions, &nav, &mut mirror).await;

            assert_eq!(state, GuardState::RedirectLogin);
            assert!(state.session().is_none());
            assert_eq!(nav.visits(), vec![LOGIN_PATH.to_string()]);
        }
    }

    #[tokio::test]
    async fn resolution_failure_is_treated_as_signed_out() {
        let sessions = FakeSessions::with(Err(AppError::database("connection refused")));
        let nav = RecordingNavigator::default();
        let mut mirror = FakeMirror::default();

        let state = mount(Role::Admin, &sessions, &nav, &mut mirror).await;

        assert_eq!(state, GuardState::RedirectLogin);
        assert_eq!(nav.visits(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn matching_role_renders_and_remembers_the_session() {
        for role in Role::ALL {
            let sessions = FakeSessions::signed_in(role);
            let nav = RecordingNavigator::default();
            let mut mirror = FakeMirror::default();

            let state = mount(role, &sessions, &nav, &mut mirror).await;

            assert_eq!(state, GuardState::Rendered(user(role)));
            assert_eq!(mirror.user, Some(user(role)));
            assert!(nav.visits().is_empty());
            assert_eq!(sessions.resolves.get(), 1);
        }
    }

    #[tokio::test]
    async fn expired_session_clears_a_stale_mirror() {
        let outcomes = [Ok(None), Err(AppError::internal("network unreachable"))];
        for outcome in outcomes {
            let sessions = FakeSessions::with(outcome);
            let nav = RecordingNavigator::default();
            let mut mirror = FakeMirror {
                user: Some(user(Role::Admin)),
            };

            mount(Role::Admin, &sessions, &nav, &mut mirror).await;

            assert!(mirror.user.is_none());
            assert_eq!(nav.visits(), vec![LOGIN_PATH.to_string()]);
            // The login page now keeps the form instead of bouncing back.
            assert_eq!(signed_in_home(&mirror), None);
        }
    }

    #[tokio::test]
    async fn role_redirect_leaves_the_mirror_alone() {
        let sessions = FakeSessions::signed_in(Role::User);
        let nav = RecordingNavigator::default();
        let mut mirror = FakeMirror {
            user: Some(user(Role::User)),
        };

        mount(Role::Organization, &sessions, &nav, &mut mirror).await;

        assert_eq!(mirror.user, Some(user(Role::User)));
        assert_eq!(signed_in_home(&mirror), Some("/dashboard"));
    }

    #[test]
    fn pending_state_settles_without_side_effects() {
        let nav = RecordingNavigator::default();
        let mut mirror = FakeMirror {
            user: Some(user(Role::Organization)),
        };

        settle(&GuardState::Pending, &mut mirror, &nav);

        assert!(nav.visits().is_empty());
        assert!(mirror.user.is_some());
        assert!(GuardState::Pending.session().is_none());
    }

    #[test]
    fn signed_in_home_follows_the_remembered_role() {
        let mut mirror = FakeMirror::default();
        assert_eq!(signed_in_home(&mirror), None);
        mirror.remember(&user(Role::Organization));
        assert_eq!(signed_in_home(&mirror), Some("/organization/dashboard"));
    }

    #[tokio::test]
    async fn resolve_does_not_navigate() {
        let sessions = FakeSessions::with(Ok(None));
        let nav = RecordingNavigator::default();
        let state = RouteGuard::new(Role::Admin).resolve(&sessions).await;
        assert_eq!(state, GuardState::RedirectLogin);
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn landing_sends_sessions_home() {
        let sessions = FakeSessions::signed_in(Role::Organization);
        assert_eq!(landing_path(&sessions).await, "/organization/dashboard");

        let signed_out = FakeSessions::with(Ok(None));
        assert_eq!(landing_path(&signed_out).await, LOGIN_PATH);

        let broken = FakeSessions::with(Err(AppError::internal("boom")));
        assert_eq!(landing_path(&broken).await, LOGIN_PATH);
    }

    #[tokio::test]
    async fn sign_out_redirects_even_when_the_store_fails() {
        let mut sessions = FakeSessions::signed_in(Role::Organization);
        sessions.fail_end = true;
        let nav = RecordingNavigator::default();

        sign_out(&sessions, &nav).await;

        assert!(sessions.ended.get());
        assert_eq!(nav.visits(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn redirect_targets_follow_the_role_table() {
        assert_eq!(GuardState::RedirectLogin.redirect_target(), Some("/auth/login"));
        assert_eq!(
            GuardState::RedirectRoleHome(Role::Admin).redirect_target(),
            Some("/admin/dashboard")
        );
        assert_eq!(
            GuardState::Rendered(user(Role::User)).redirect_target(),
            None
        );
    }
}
