mod cases;
mod dashboard;
mod layout;
mod profile;

pub use cases::OrganizationCases;
pub use dashboard::OrganizationDashboard;
pub use layout::OrganizationLayout;
pub use profile::OrganizationProfile;

use dioxus::prelude::*;
use shared_types::{AppError, Organization};

/// Load the organization record registered to the signed-in account.
///
/// Shared by the dashboard and profile pages. Suspends while loading.
fn use_my_organization() -> Result<Resource<Result<Option<Organization>, ServerFnError>>, RenderError> {
    use_server_future(server::api::get_my_organization)
}

/// User-facing message for a failed organization lookup.
fn load_error_message(err: &ServerFnError) -> String {
    AppError::friendly_message(&err.to_string())
}
