use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthResponse, LoginRequest, MessageResponse, Organization,
    OrganizationStatus, OrganizationSummary, Role, SessionUser,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        rest::auth::login,
        rest::auth::logout,
        rest::auth::session,
        // Organizations
        rest::organization::list_organizations,
        rest::organization::organization_summary,
        rest::organization::my_organization,
        rest::organization::get_organization,
        rest::organization::approve_organization,
        rest::organization::reject_organization,
        // Health
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthResponse,
        HealthResponse,
        LoginRequest,
        MessageResponse,
        Organization,
        OrganizationStatus,
        OrganizationSummary,
        Role,
        SessionUser,
    )),
    tags(
        (name = "auth", description = "Console sign-in and session endpoints"),
        (name = "organizations", description = "Partner organization review endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Ushuari Console API",
        description = "Admin and partner console for the Ushuari legal marketplace",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST API at `/api/*`, the health check,
/// and the API docs at `/docs`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
