use async_trait::async_trait;
use std::sync::RwLock;

use crate::{sort_for_listing, AppError, Decision, Organization};

/// Data access for partner organizations.
///
/// The admin console and the REST API depend only on this trait; the
/// Postgres store lives in the server crate and the in-memory store below
/// backs tests and database-less demo runs.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// All organizations, oldest first.
    async fn list(&self) -> Result<Vec<Organization>, AppError>;

    async fn get(&self, id: &str) -> Result<Organization, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, AppError>;

    /// Record an admin decision and return the updated organization.
    async fn decide(&self, id: &str, decision: Decision) -> Result<Organization, AppError>;

    async fn approve(&self, id: &str) -> Result<Organization, AppError> {
        self.decide(id, Decision::Approve).await
    }

    async fn reject(&self, id: &str) -> Result<Organization, AppError> {
        self.decide(id, Decision::Reject).await
    }

    /// Insert records that are not yet present (matched by id).
    /// Returns the number inserted.
    async fn seed(&self, records: Vec<Organization>) -> Result<usize, AppError>;
}

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Organization {id} not found"))
}

fn poisoned() -> AppError {
    AppError::internal("Organization store lock poisoned")
}

/// Organization store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationDirectory {
    records: RwLock<Vec<Organization>>,
}

impl InMemoryOrganizationDirectory {
    pub fn new(records: Vec<Organization>) -> Self {
        let mut records = records;
        sort_for_listing(&mut records);
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl OrganizationDirectory for InMemoryOrganizationDirectory {
    async fn list(&self) -> Result<Vec<Organization>, AppError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    async fn get(&self, id: &str) -> Result<Organization, AppError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        guard
            .iter()
            .find(|org| org.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, AppError> {
        let email = email.trim();
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard
            .iter()
            .find(|org| org.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn decide(&self, id: &str, decision: Decision) -> Result<Organization, AppError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        let org = guard
            .iter_mut()
            .find(|org| org.id == id)
            .ok_or_else(|| not_found(id))?;
        org.status = decision.apply_to(org.status)?;
        tracing::info!(organization_id = id, status = %org.status, "Organization status updated");
        Ok(org.clone())
    }

    async fn seed(&self, records: Vec<Organization>) -> Result<usize, AppError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        let mut inserted = 0;
        for record in records {
            if guard.iter().all(|existing| existing.id != record.id) {
                guard.push(record);
                inserted += 1;
            }
        }
        sort_for_listing(&mut guard);
        Ok(inserted)
    }
}
