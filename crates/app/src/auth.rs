use dioxus::prelude::*;
use shared_types::{Role, SessionMirror, SessionUser};

/// App-wide mirror of the signed-in account.
///
/// Written on login and by the route guard once a protected page renders.
/// Cleared on logout and whenever the guard sends the client to login. Protected pages read their session from
/// [`crate::guard::use_session_user`] instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    /// Store `user`, skipping the write when nothing changed.
    pub fn set_user(&mut self, user: SessionUser) {
        if self.current_user.peek().as_ref() != Some(&user) {
            self.current_user.set(Some(user));
        }
    }

    pub fn clear_auth(&mut self) {
        if self.current_user.peek().is_some() {
            self.current_user.set(None);
        }
    }
}

impl SessionMirror for AuthState {
    fn remember(&mut self, user: &SessionUser) {
        self.set_user(user.clone());
    }

    fn forget(&mut self) {
        self.clear_auth();
    }

    fn remembered_role(&self) -> Option<Role> {
        self.current_user.peek().as_ref().map(|user| user.role)
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
