use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let (app, _state) = common::test_app();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_docs_are_served() {
    let (app, _state) = common::test_app();

    let (status, body) = common::get(&app, "/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().is_some_and(|html| html.contains("Ushuari Console API")));
}
