use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common;

fn login_body(email: &str, password: &str) -> String {
    serde_json::json!({ "email": email, "password": password }).to_string()
}

#[tokio::test]
async fn test_login_returns_session_and_sets_cookies() {
    let (app, _state) = common::test_app();

    let (status, headers, body) = common::post_json_with_headers(
        &app,
        "/api/auth/login",
        &login_body("contact@legalexperts.com", server::seed::DEMO_PASSWORD),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "organization");
    assert_eq!(body["user"]["email"], "contact@legalexperts.com");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));

    let cookies = common::set_cookies(&headers);
    assert!(cookies.iter().any(|c| c.starts_with("ushuari_access=") && c.len() > "ushuari_access=".len()));
    assert!(cookies.iter().any(|c| c.starts_with("ushuari_refresh=")));
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let (app, _state) = common::test_app();

    let (status, headers, body) = common::post_json_with_headers(
        &app,
        "/api/auth/login",
        &login_body("admin@ushuari.com", "not-the-password"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");
    assert!(common::set_cookies(&headers).is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let (app, _state) = common::test_app();

    let (status, _, body) = common::post_json_with_headers(
        &app,
        "/api/auth/login",
        &login_body("nobody@ushuari.com", server::seed::DEMO_PASSWORD),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_session_cookie_resolves_current_user() {
    let (app, _state) = common::test_app();

    let (_, headers, _) = common::post_json_with_headers(
        &app,
        "/api/auth/login",
        &login_body("admin@ushuari.com", server::seed::DEMO_PASSWORD),
    )
    .await;
    let cookie = common::set_cookies(&headers).join("; ");

    let (status, _, body) = common::get_with_cookie(&app, "/api/auth/session", &cookie).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "usr-admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_session_accepts_bearer_token() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::User);

    let (status, body) = common::get_authed(&app, "/api/auth/session", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "client@ushuari.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn test_session_without_credentials_is_unauthorized() {
    let (app, _state) = common::test_app();

    let (status, body) = common::get(&app, "/api/auth/session").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn test_session_with_garbage_token_is_unauthorized() {
    let (app, _state) = common::test_app();

    let (status, _) = common::get_authed(&app, "/api/auth/session", "not.a.jwt").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_cookie_alone_restores_the_session() {
    let (app, _state) = common::test_app();

    let (_, headers, _) = common::post_json_with_headers(
        &app,
        "/api/auth/login",
        &login_body("client@ushuari.com", server::seed::DEMO_PASSWORD),
    )
    .await;
    let refresh = common::set_cookies(&headers)
        .into_iter()
        .find(|c| c.starts_with("ushuari_refresh="))
        .expect("refresh cookie");

    let (status, headers, body) = common::get_with_cookie(&app, "/api/auth/session", &refresh).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "usr-client");
    let renewed = common::set_cookies(&headers);
    assert!(renewed.iter().any(|c| c.starts_with("ushuari_access=")));
}

#[tokio::test]
async fn test_logout_clears_both_cookies() {
    let (app, _state) = common::test_app();

    let (status, headers, body) =
        common::post_json_with_headers(&app, "/api/auth/logout", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed out");
    let cookies = common::set_cookies(&headers);
    assert!(cookies.contains(&"ushuari_access=".to_string()));
    assert!(cookies.contains(&"ushuari_refresh=".to_string()));
}
