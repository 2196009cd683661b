//! Server functions called by the console UI.

use dioxus::prelude::*;
use shared_types::FeatureFlags;

#[cfg(feature = "server")]
pub(crate) mod auth;

mod session;
pub use session::*;

mod organization;
pub use organization::*;

/// Feature flags loaded from `config.toml`.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
