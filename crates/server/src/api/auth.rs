// Server-only helpers shared by the api/* server functions.

use dioxus::prelude::*;
use shared_types::{AppError, Role};

use crate::auth::extractors::ensure_role;
use crate::auth::jwt::{self, Claims};
use crate::auth::cookies;
use crate::error_convert::AppErrorExt;
use crate::state::AppState;

/// Claims for the current request, if any.
///
/// Prefers the claims the auth middleware validated and falls back to
/// parsing the access token from the cookie or Bearer header.
pub(crate) fn current_claims() -> Option<Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<Claims>() {
        return Some(claims.clone());
    }

    cookies::extract_access_token(&parts.headers).and_then(|token| jwt::validate_access_token(&token).ok())
}

/// Claims for the current request or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<Claims, ServerFnError> {
    current_claims().ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Claims for the current request, which must carry exactly `role`.
pub(crate) fn require_role(role: Role) -> Result<Claims, ServerFnError> {
    let claims = require_auth()?;
    ensure_role(&claims, role).map_err(|e| e.into_server_fn_error())?;
    Ok(claims)
}

pub(crate) fn state() -> Result<&'static AppState, ServerFnError> {
    crate::state::app_state().map_err(|e| e.into_server_fn_error())
}
