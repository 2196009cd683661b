use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

/// Approval status of a partner organization.
///
/// Lifecycle: `pending -> approved | rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    Pending,
    Approved,
    Rejected,
}

impl OrganizationStatus {
    pub const ALL: [OrganizationStatus; 3] = [
        OrganizationStatus::Pending,
        OrganizationStatus::Approved,
        OrganizationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationStatus::Pending => "pending",
            OrganizationStatus::Approved => "approved",
            OrganizationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(OrganizationStatus::Pending),
            "approved" => Some(OrganizationStatus::Approved),
            "rejected" => Some(OrganizationStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganizationStatus::Pending => "Pending",
            OrganizationStatus::Approved => "Approved",
            OrganizationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admin decision on a pending organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn target(&self) -> OrganizationStatus {
        match self {
            Decision::Approve => OrganizationStatus::Approved,
            Decision::Reject => OrganizationStatus::Rejected,
        }
    }

    /// Resolve the status a record ends up in when this decision is applied.
    ///
    /// Repeating the decision a record already carries is a no-op. Flipping
    /// a decided record to the opposite outcome is a conflict.
    pub fn apply_to(&self, current: OrganizationStatus) -> Result<OrganizationStatus, AppError> {
        let target = self.target();
        match current {
            OrganizationStatus::Pending => Ok(target),
            same if same == target => Ok(same),
            decided => Err(AppError::conflict(format!(
                "Organization is already {decided}"
            ))),
        }
    }
}

/// A partner organization on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub status: OrganizationStatus,
    pub created_at: DateTime<Utc>,
    pub contact_person: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Organization {
    pub fn is_pending(&self) -> bool {
        self.status == OrganizationStatus::Pending
    }
}

/// Headline counts for the admin dashboard cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrganizationSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl OrganizationSummary {
    pub fn from_records(records: &[Organization]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut acc, org| {
                match org.status {
                    OrganizationStatus::Pending => acc.pending += 1,
                    OrganizationStatus::Approved => acc.approved += 1,
                    OrganizationStatus::Rejected => acc.rejected += 1,
                }
                acc
            },
        )
    }
}

/// Replace the status of the record with `id`, leaving every other record,
/// field, and the ordering untouched. Returns `false` when no record matches.
pub fn replace_status(records: &mut [Organization], id: &str, status: OrganizationStatus) -> bool {
    match records.iter_mut().find(|org| org.id == id) {
        Some(org) => {
            org.status = status;
            true
        }
        None => false,
    }
}

/// Records whose status matches `filter`; every record when `filter` is `None`.
pub fn filter_by_status(
    records: &[Organization],
    filter: Option<OrganizationStatus>,
) -> Vec<Organization> {
    records
        .iter()
        .filter(|org| filter.map_or(true, |status| org.status == status))
        .cloned()
        .collect()
}

/// Canonical listing order: oldest partner first, ties broken by id.
pub fn sort_for_listing(records: &mut [Organization]) {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}
