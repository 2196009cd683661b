pub mod auth;
pub mod organization;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the REST API router.
///
/// Named organization routes are registered ahead of `{id}` so `me` and
/// `summary` never reach the id lookup.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        // Organizations
        .route("/api/organizations", get(organization::list_organizations))
        .route("/api/organizations/summary", get(organization::organization_summary))
        .route("/api/organizations/me", get(organization::my_organization))
        .route("/api/organizations/{id}", get(organization::get_organization))
        .route("/api/organizations/{id}/approve", post(organization::approve_organization))
        .route("/api/organizations/{id}/reject", post(organization::reject_organization))
}
