use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware,
    Router,
};
use chrono::Utc;
use serde_json::Value;
use server::auth::session;
use server::state::AppState;
use shared_types::{Role, SessionUser};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-unit-tests";

/// Build a test router over fresh in-memory stores holding the demo
/// organizations and one account per role.
///
/// Includes the permissive auth middleware so `AuthRequired` extractors see
/// Bearer tokens and session cookies.
pub fn test_app() -> (Router, AppState) {
    std::env::set_var("JWT_SECRET", JWT_SECRET);

    let accounts = server::seed::demo_accounts().expect("Failed to build demo accounts");
    let state = AppState::in_memory(server::seed::demo_organizations(Utc::now()), accounts);

    let router = server::openapi::api_router(state.clone()).layer(middleware::from_fn_with_state(
        state.clone(),
        server::auth::middleware::auth_middleware,
    ));

    (router, state)
}

/// The demo account holding `role`.
pub fn demo_user(role: Role) -> SessionUser {
    let (id, name, email) = match role {
        Role::Admin => ("usr-admin", "Ushuari Admin", "admin@ushuari.com"),
        Role::Organization => ("usr-legal-experts", "Jane Smith", "contact@legalexperts.com"),
        Role::User => ("usr-client", "Amina Okafor", "client@ushuari.com"),
    };
    SessionUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

/// Access token for the demo account holding `role`.
pub fn token_for(role: Role) -> String {
    std::env::set_var("JWT_SECRET", JWT_SECRET);
    session::issue(demo_user(role))
        .expect("Failed to issue test session")
        .access_token
}

/// GET a route without credentials.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with a Bearer token.
pub async fn get_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST to a route with a Bearer token and no body.
pub async fn post_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST without credentials and no body.
pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST JSON and return the response headers as well (for Set-Cookie checks).
pub async fn post_json_with_headers(
    app: &Router,
    uri: &str,
    body: &str,
) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_with_headers(app, req).await
}

/// GET a route presenting a raw `Cookie` header.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();

    send_with_headers(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_with_headers(app, req).await;
    (status, body)
}

async fn send_with_headers(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}

/// `name=value` pairs from every Set-Cookie header in `headers`.
pub fn set_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(|pair| pair.trim().to_string())
        .collect()
}
