use axum::{extract::State, http::HeaderMap, Json};

use shared_types::{AppError, AuthResponse, LoginRequest, MessageResponse, SessionUser};

use crate::auth::cookies::{clear_auth_cookies, set_auth_cookies};
use crate::auth::extractors::AuthRequired;
use crate::auth::session;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/auth/login
// ---------------------------------------------------------------------------

/// Sign in with email and password.
///
/// Sets the session cookies and also returns the token pair for clients
/// that authenticate with a Bearer header.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 401, description = "Invalid email or password", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all, fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), AppError> {
    let issued = session::login(state.users.as_ref(), &body).await?;

    let mut headers = HeaderMap::new();
    set_auth_cookies(&mut headers, &issued.access_token, &issued.refresh_token);

    Ok((
        headers,
        Json(AuthResponse {
            user: issued.user,
            access_token: issued.access_token,
            refresh_token: issued.refresh_token,
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /api/auth/logout
// ---------------------------------------------------------------------------

/// End the session by clearing both cookies. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse)
    ),
    tag = "auth"
)]
#[tracing::instrument]
pub async fn logout() -> (HeaderMap, Json<MessageResponse>) {
    let mut headers = HeaderMap::new();
    clear_auth_cookies(&mut headers);
    (headers, Json(MessageResponse::new("Signed out")))
}

// ---------------------------------------------------------------------------
// GET /api/auth/session
// ---------------------------------------------------------------------------

/// The account behind the current session, with its current role.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = SessionUser),
        (status = 401, description = "No valid session", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn session(
    State(state): State<AppState>,
    AuthRequired(claims): AuthRequired,
) -> Result<Json<SessionUser>, AppError> {
    session::resolve(state.users.as_ref(), &claims)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::unauthorized("Session account no longer exists"))
}
