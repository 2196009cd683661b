use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common;

fn ids(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|o| o["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_returns_every_organization_oldest_first() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["org-1", "org-2", "org-3"]);
    assert_eq!(body[0]["name"], "Legal Experts LLC");
    assert_eq!(body[0]["status"], "approved");
    assert_eq!(body[0]["contactPerson"], "Jane Smith");
    assert!(body[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations?status=pending", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["org-2", "org-3"]);

    let (_, body) = common::get_authed(&app, "/api/organizations?status=rejected", &token).await;
    assert!(ids(&body).is_empty());

    let (_, body) = common::get_authed(&app, "/api/organizations?status=all", &token).await;
    assert_eq!(ids(&body).len(), 3);
}

#[tokio::test]
async fn test_list_rejects_unknown_status() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations?status=archived", &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown organization status: archived");
}

#[tokio::test]
async fn test_summary_counts_by_status() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations/summary", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["pending"], 2);
    assert_eq!(body["approved"], 1);
    assert_eq!(body["rejected"], 0);
}

#[tokio::test]
async fn test_get_single_organization() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations/org-3", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Family Law Partners");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["specialties"][0], "Family Law");
}

#[tokio::test]
async fn test_get_unknown_organization_is_not_found() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::get_authed(&app, "/api/organizations/org-404", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn test_my_organization_matches_account_email() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Organization);

    let (status, body) = common::get_authed(&app, "/api/organizations/me", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "org-1");
    assert_eq!(body["email"], "contact@legalexperts.com");
}
