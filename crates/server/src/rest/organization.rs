use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use shared_types::{filter_by_status, AppError, Organization, OrganizationStatus, OrganizationSummary};

use crate::auth::extractors::{AdminRequired, OrganizationRequired, RoleRequired};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct OrganizationListParams {
    /// `pending`, `approved`, or `rejected`. Omit for every organization.
    pub status: Option<String>,
}

impl OrganizationListParams {
    fn status_filter(&self) -> Result<Option<OrganizationStatus>, AppError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => OrganizationStatus::parse(raw)
                .map(Some)
                .ok_or_else(|| AppError::bad_request(format!("Unknown organization status: {raw}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /api/organizations
// ---------------------------------------------------------------------------

/// List partner organizations, oldest first.
#[utoipa::path(
    get,
    path = "/api/organizations",
    params(OrganizationListParams),
    responses(
        (status = 200, description = "Organizations", body = Vec<Organization>),
        (status = 400, description = "Unknown status filter", body = AppError),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Administrator role required", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all, fields(status = ?params.status))]
pub async fn list_organizations(
    State(state): State<AppState>,
    _admin: AdminRequired,
    Query(params): Query<OrganizationListParams>,
) -> Result<Json<Vec<Organization>>, AppError> {
    let filter = params.status_filter()?;
    let records = state.organizations.list().await?;
    Ok(Json(filter_by_status(&records, filter)))
}

// ---------------------------------------------------------------------------
// GET /api/organizations/summary
// ---------------------------------------------------------------------------

/// Counts for the admin dashboard cards.
#[utoipa::path(
    get,
    path = "/api/organizations/summary",
    responses(
        (status = 200, description = "Organization counts", body = OrganizationSummary),
        (status = 403, description = "Administrator role required", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all)]
pub async fn organization_summary(
    State(state): State<AppState>,
    _admin: AdminRequired,
) -> Result<Json<OrganizationSummary>, AppError> {
    let records = state.organizations.list().await?;
    Ok(Json(OrganizationSummary::from_records(&records)))
}

// ---------------------------------------------------------------------------
// GET /api/organizations/me
// ---------------------------------------------------------------------------

/// The organization record registered under the signed-in account's email.
#[utoipa::path(
    get,
    path = "/api/organizations/me",
    responses(
        (status = 200, description = "Own organization", body = Organization),
        (status = 403, description = "Organization role required", body = AppError),
        (status = 404, description = "No organization registered for this account", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all)]
pub async fn my_organization(
    State(state): State<AppState>,
    RoleRequired(claims): OrganizationRequired,
) -> Result<Json<Organization>, AppError> {
    state
        .organizations
        .find_by_email(&claims.email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("No organization registered for this account"))
}

// ---------------------------------------------------------------------------
// GET /api/organizations/{id}
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    params(("id" = String, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization", body = Organization),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all, fields(organization_id = %id))]
pub async fn get_organization(
    State(state): State<AppState>,
    _admin: AdminRequired,
    Path(id): Path<String>,
) -> Result<Json<Organization>, AppError> {
    Ok(Json(state.organizations.get(&id).await?))
}

// ---------------------------------------------------------------------------
// POST /api/organizations/{id}/approve
// ---------------------------------------------------------------------------

/// Approve a pending organization. Approving an approved record is a no-op.
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/approve",
    params(("id" = String, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Updated organization", body = Organization),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Organization was already rejected", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all, fields(organization_id = %id))]
pub async fn approve_organization(
    State(state): State<AppState>,
    RoleRequired(claims): AdminRequired,
    Path(id): Path<String>,
) -> Result<Json<Organization>, AppError> {
    let updated = state.organizations.approve(&id).await?;
    tracing::info!(organization_id = %id, admin_id = %claims.sub, "Organization approved");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// POST /api/organizations/{id}/reject
// ---------------------------------------------------------------------------

/// Reject a pending organization. Rejecting a rejected record is a no-op.
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/reject",
    params(("id" = String, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Updated organization", body = Organization),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Organization was already approved", body = AppError)
    ),
    tag = "organizations"
)]
#[tracing::instrument(skip_all, fields(organization_id = %id))]
pub async fn reject_organization(
    State(state): State<AppState>,
    RoleRequired(claims): AdminRequired,
    Path(id): Path<String>,
) -> Result<Json<Organization>, AppError> {
    let updated = state.organizations.reject(&id).await?;
    tracing::info!(organization_id = %id, admin_id = %claims.sub, "Organization rejected");
    Ok(Json(updated))
}
