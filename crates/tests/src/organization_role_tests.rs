use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common;

const ADMIN_ONLY: [&str; 3] = [
    "/api/organizations",
    "/api/organizations/summary",
    "/api/organizations/org-1",
];

#[tokio::test]
async fn test_admin_routes_require_a_session() {
    let (app, _state) = common::test_app();

    for uri in ADMIN_ONLY {
        let (status, _) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
    let (status, _) = common::post(&app, "/api/organizations/org-2/approve").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_forbid_other_roles() {
    let (app, _state) = common::test_app();

    for role in [Role::Organization, Role::User] {
        let token = common::token_for(role);
        for uri in ADMIN_ONLY {
            let (status, body) = common::get_authed(&app, uri, &token).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri} as {role}");
            assert_eq!(body["message"], "Administrator role required");
        }
    }
}

#[tokio::test]
async fn test_forbidden_decision_leaves_record_untouched() {
    let (app, _state) = common::test_app();
    let org_token = common::token_for(Role::Organization);

    let (status, _) = common::post_authed(&app, "/api/organizations/org-2/approve", &org_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = common::token_for(Role::Admin);
    let (_, org) = common::get_authed(&app, "/api/organizations/org-2", &admin).await;
    assert_eq!(org["status"], "pending");
}

#[tokio::test]
async fn test_own_organization_requires_organization_role() {
    let (app, _state) = common::test_app();

    for role in [Role::Admin, Role::User] {
        let token = common::token_for(role);
        let (status, _) = common::get_authed(&app, "/api/organizations/me", &token).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "as {role}");
    }

    let (status, _) = common::get(&app, "/api/organizations/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
