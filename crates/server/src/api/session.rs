use dioxus::prelude::*;
use shared_types::SessionUser;

#[cfg(feature = "server")]
use super::auth::{current_claims, state};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Sign in with email and password. Sets the session cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::auth::{cookies, session};
    use shared_types::LoginRequest;

    let state = state()?;
    let req = LoginRequest { email, password };
    let issued = session::login(state.users.as_ref(), &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_auth_cookies(&issued.access_token, &issued.refresh_token);
    Ok(issued.user)
}

/// Resolve the current session. `None` when signed out.
///
/// The auth middleware has already refreshed an expired access token when a
/// valid refresh cookie was present. The role is read from the account store.
/// Cookies pointing at a deleted account are cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use crate::auth::{cookies, session};

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let state = state()?;
    let user = session::resolve(state.users.as_ref(), &claims)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    if user.is_none() {
        cookies::schedule_clear_cookies();
    }
    Ok(user)
}

/// End the session by clearing both cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(claims) = current_claims() {
        tracing::info!(user_id = %claims.sub, "Signed out");
    }
    crate::auth::cookies::schedule_clear_cookies();
    Ok(())
}
