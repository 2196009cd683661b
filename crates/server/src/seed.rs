//! Demo records inserted when the `demo_seed` flag is on.

use chrono::{DateTime, Duration, Utc};
use shared_types::{AppError, Organization, OrganizationStatus, Role};

use crate::auth::password::hash_password;
use crate::repo::UserRecord;
use crate::state::AppState;

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "ushuari-demo";

fn org(
    id: &str,
    name: &str,
    email: &str,
    description: &str,
    status: OrganizationStatus,
    created_at: DateTime<Utc>,
    contact_person: &str,
    specialties: &[&str],
) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        description: description.to_string(),
        status,
        created_at,
        contact_person: contact_person.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

/// Three partner organizations: one approved, two awaiting review.
pub fn demo_organizations(now: DateTime<Utc>) -> Vec<Organization> {
    vec![
        org(
            "org-1",
            "Legal Experts LLC",
            "contact@legalexperts.com",
            "Specializing in employment and contract law",
            OrganizationStatus::Approved,
            now - Duration::days(30),
            "Jane Smith",
            &["Employment Law", "Contract Law"],
        ),
        org(
            "org-2",
            "Tenant Rights Group",
            "help@tenantrightsgroup.org",
            "Advocating for tenant rights and housing issues",
            OrganizationStatus::Pending,
            now - Duration::days(3),
            "Michael Johnson",
            &["Housing Law", "Tenant Rights"],
        ),
        org(
            "org-3",
            "Family Law Partners",
            "info@familylawpartners.com",
            "Legal assistance with family law matters",
            OrganizationStatus::Pending,
            now - Duration::days(1),
            "Robert Wilson",
            &["Family Law", "Divorce", "Child Custody"],
        ),
    ]
}

/// One account per role. The organization account shares its email with
/// the approved demo organization so its profile page has a record.
pub fn demo_accounts() -> Result<Vec<UserRecord>, AppError> {
    let hash = hash_password(DEMO_PASSWORD)
        .map_err(|e| AppError::internal(format!("Failed to hash demo password: {e}")))?;
    let account = |id: &str, name: &str, email: &str, role: Role| UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        password_hash: hash.clone(),
    };
    Ok(vec![
        account("usr-admin", "Ushuari Admin", "admin@ushuari.com", Role::Admin),
        account(
            "usr-legal-experts",
            "Jane Smith",
            "contact@legalexperts.com",
            Role::Organization,
        ),
        account("usr-client", "Amina Okafor", "client@ushuari.com", Role::User),
    ])
}

/// Insert the demo organizations and accounts that are not yet present.
pub async fn seed_demo_data(state: &AppState) -> Result<(), AppError> {
    let organizations = state
        .organizations
        .seed(demo_organizations(Utc::now()))
        .await?;
    let accounts = state.users.seed(demo_accounts()?).await?;
    tracing::info!(
        organizations,
        accounts,
        backend = state.backend_name(),
        "Demo data seeded"
    );
    Ok(())
}
