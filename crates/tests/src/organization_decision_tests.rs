use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common;

#[tokio::test]
async fn test_approve_pending_organization() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::post_authed(&app, "/api/organizations/org-2/approve", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "org-2");
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_decision_changes_only_the_target() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (_, before) = common::get_authed(&app, "/api/organizations", &token).await;
    common::post_authed(&app, "/api/organizations/org-3/reject", &token).await;
    let (_, after) = common::get_authed(&app, "/api/organizations", &token).await;

    let mut expected = before.clone();
    expected[2]["status"] = serde_json::json!("rejected");
    assert_eq!(after, expected);

    let (_, summary) = common::get_authed(&app, "/api/organizations/summary", &token).await;
    assert_eq!(summary["pending"], 1);
    assert_eq!(summary["rejected"], 1);
}

#[tokio::test]
async fn test_repeating_a_decision_is_idempotent() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::post_authed(&app, "/api/organizations/org-1/approve", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_flipping_a_decision_conflicts() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (status, body) = common::post_authed(&app, "/api/organizations/org-1/reject", &token).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Organization is already approved");

    let (_, org) = common::get_authed(&app, "/api/organizations/org-1", &token).await;
    assert_eq!(org["status"], "approved");
}

#[tokio::test]
async fn test_decision_on_unknown_organization_is_not_found() {
    let (app, _state) = common::test_app();
    let token = common::token_for(Role::Admin);

    let (approve, _) = common::post_authed(&app, "/api/organizations/org-9/approve", &token).await;
    let (reject, body) = common::post_authed(&app, "/api/organizations/org-9/reject", &token).await;

    assert_eq!(approve, StatusCode::NOT_FOUND);
    assert_eq!(reject, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Organization org-9 not found");
}

#[tokio::test]
async fn test_approved_organization_sees_new_status() {
    let (app, _state) = common::test_app();
    let admin = common::token_for(Role::Admin);

    let (status, _) = common::post_authed(&app, "/api/organizations/org-2/approve", &admin).await;
    assert_eq!(status, StatusCode::OK);

    let (_, pending) = common::get_authed(&app, "/api/organizations?status=pending", &admin).await;
    assert_eq!(pending.as_array().map(Vec::len), Some(1));
}
