use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{Cookie, SameSite};
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "ushuari_access";
pub const REFRESH_COOKIE: &str = "ushuari_refresh";

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

fn session_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(crate::config::session_settings().cookie_secure);

    if let Some(domain) = cookie_domain() {
        builder = builder.domain(domain);
    }
    builder.build()
}

fn append(headers: &mut HeaderMap, cookie: Cookie<'static>) {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!(cookie = cookie.name(), error = %e, "Dropping unencodable cookie"),
    }
}

/// Extract the access token from cookies (preferred) or Bearer header (fallback).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, ACCESS_COOKIE).or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    })
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Append Set-Cookie headers for a fresh token pair.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    append(
        headers,
        session_cookie(ACCESS_COOKIE, access_token, jwt::access_token_minutes() * 60),
    );
    append(
        headers,
        session_cookie(REFRESH_COOKIE, refresh_token, jwt::refresh_token_days() * 86_400),
    );
}

/// Append Set-Cookie headers that expire both session cookies.
pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    append(headers, session_cookie(ACCESS_COOKIE, "", 0));
    append(headers, session_cookie(REFRESH_COOKIE, "", 0));
}

/// Cookie change requested by a server function, applied by the middleware
/// once the response is built.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Shared slot placed in request extensions by the auth middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        match self.0.lock() {
            Ok(mut slot) => *slot = Some(action),
            Err(_) => tracing::error!("Cookie slot lock poisoned"),
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return;
    };
    if let Some(slot) = ctx.parts_mut().extensions.get::<CookieSlot>() {
        slot.put(action);
    };
}

/// Schedule auth cookies from inside a server function.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Schedule cookie clearing from inside a server function.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
