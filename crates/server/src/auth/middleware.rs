use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_access_token;
use super::session;
use crate::state::AppState;

/// Permissive auth middleware.
///
/// On each request:
/// 1. Validates the access token from cookies (or Bearer header fallback)
/// 2. If missing or invalid, attempts transparent refresh using the refresh cookie
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie actions to the response
///
/// Does NOT reject unauthenticated requests. Downstream handlers decide.
pub async fn auth_middleware(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<session::IssuedSession> = None;

    let claims = cookies::extract_access_token(&headers).and_then(|t| validate_access_token(&t).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
        }
        None => {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                match session::refresh(state.users.as_ref(), &refresh_token).await {
                    Ok(Some(issued)) => {
                        if let Ok(claims) = validate_access_token(&issued.access_token) {
                            tracing::debug!(user_id = %claims.sub, "Session refreshed transparently");
                            req.extensions_mut().insert(claims);
                            refreshed = Some(issued);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!(error = %e, "Transparent session refresh failed"),
                }
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(issued) = refreshed {
        cookies::set_auth_cookies(response.headers_mut(), &issued.access_token, &issued.refresh_token);
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}
