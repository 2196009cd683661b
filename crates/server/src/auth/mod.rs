pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod session;

use shared_types::Role;

use crate::repo::{UserDirectory, UserRecord};

/// Check if the given email matches the `ADMIN_EMAIL` env var (case-insensitive).
/// Returns `false` if the env var is empty or unset.
pub fn is_admin_email(email: &str) -> bool {
    match std::env::var("ADMIN_EMAIL") {
        Ok(admin) if !admin.trim().is_empty() => admin.trim().eq_ignore_ascii_case(email.trim()),
        _ => false,
    }
}

/// Promote the account to admin when its email matches `ADMIN_EMAIL`.
/// Store errors are non-fatal: the account keeps its current role.
pub async fn maybe_promote_admin(users: &dyn UserDirectory, mut record: UserRecord) -> UserRecord {
    if record.role == Role::Admin || !is_admin_email(&record.email) {
        return record;
    }

    match users.set_role(&record.id, Role::Admin).await {
        Ok(()) => {
            tracing::info!(user_id = %record.id, email = %record.email, "Promoted account to admin via ADMIN_EMAIL");
            record.role = Role::Admin;
        }
        Err(e) => {
            tracing::error!(user_id = %record.id, error = %e, "Failed to promote admin account");
        }
    }
    record
}
