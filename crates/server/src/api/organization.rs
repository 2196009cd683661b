use dioxus::prelude::*;
use shared_types::{Organization, OrganizationStatus, OrganizationSummary};

#[cfg(feature = "server")]
use super::auth::{require_role, state};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use shared_types::Role;

/// Organizations for the admin console, oldest first, optionally narrowed
/// to one status.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_organizations(
    status: Option<OrganizationStatus>,
) -> Result<Vec<Organization>, ServerFnError> {
    require_role(Role::Admin)?;
    let records = state()?
        .organizations
        .list()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(shared_types::filter_by_status(&records, status))
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_organization_summary() -> Result<OrganizationSummary, ServerFnError> {
    require_role(Role::Admin)?;
    let records = state()?
        .organizations
        .list()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(OrganizationSummary::from_records(&records))
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_organization(id: String) -> Result<Organization, ServerFnError> {
    require_role(Role::Admin)?;
    state()?
        .organizations
        .get(&id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Approve a pending organization and return the updated record.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn approve_organization(id: String) -> Result<Organization, ServerFnError> {
    let claims = require_role(Role::Admin)?;
    let updated = state()?
        .organizations
        .approve(&id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(organization_id = %id, admin_id = %claims.sub, "Organization approved");
    Ok(updated)
}

/// Reject a pending organization and return the updated record.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn reject_organization(id: String) -> Result<Organization, ServerFnError> {
    let claims = require_role(Role::Admin)?;
    let updated = state()?
        .organizations
        .reject(&id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(organization_id = %id, admin_id = %claims.sub, "Organization rejected");
    Ok(updated)
}

/// The organization registered under the signed-in partner's email.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_my_organization() -> Result<Option<Organization>, ServerFnError> {
    let claims = require_role(Role::Organization)?;
    state()?
        .organizations
        .find_by_email(&claims.email)
        .await
        .map_err(|e| e.into_server_fn_error())
}
