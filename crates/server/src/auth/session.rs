//! Session service shared by the server functions and the REST handlers.

use shared_types::{AppError, LoginRequest, SessionUser};

use super::jwt::{self, Claims};
use super::password;
use crate::error_convert::ValidateRequest;
use crate::repo::UserDirectory;

/// A signed-in user together with a freshly issued token pair.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: SessionUser,
    pub access_token: String,
    pub refresh_token: String,
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}

/// Sign a new token pair for `user`.
pub fn issue(user: SessionUser) -> Result<IssuedSession, AppError> {
    let access_token = jwt::create_access_token(&user)?;
    let refresh_token = jwt::create_refresh_token(&user)?;
    Ok(IssuedSession {
        user,
        access_token,
        refresh_token,
    })
}

/// Verify email and password and open a session.
pub async fn login(users: &dyn UserDirectory, req: &LoginRequest) -> Result<IssuedSession, AppError> {
    req.validate_request()?;

    let record = users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = password::verify_password(&req.password, &record.password_hash).map_err(|e| {
        tracing::error!(user_id = %record.id, error = %e, "Stored password hash is malformed");
        AppError::internal("Unable to verify credentials")
    })?;
    if !valid {
        return Err(invalid_credentials());
    }

    let record = super::maybe_promote_admin(users, record).await;
    tracing::info!(user_id = %record.id, role = %record.role, "Login succeeded");
    issue(record.session_user())
}

/// Current account behind validated claims. `None` when the account is gone.
///
/// The role comes from the store, so a promotion or demotion takes effect on
/// the next resolution rather than at token expiry.
pub async fn resolve(users: &dyn UserDirectory, claims: &Claims) -> Result<Option<SessionUser>, AppError> {
    let record = users.find_by_id(&claims.sub).await?;
    if record.is_none() {
        tracing::warn!(user_id = %claims.sub, "Token references a missing account");
    }
    Ok(record.map(|r| r.session_user()))
}

/// Exchange a refresh token for a new token pair. `None` when the token is
/// invalid or its account no longer exists.
pub async fn refresh(users: &dyn UserDirectory, refresh_token: &str) -> Result<Option<IssuedSession>, AppError> {
    let Ok(claims) = jwt::validate_refresh_token(refresh_token) else {
        return Ok(None);
    };
    match resolve(users, &claims).await? {
        Some(user) => issue(user).map(Some),
        None => Ok(None),
    }
}
