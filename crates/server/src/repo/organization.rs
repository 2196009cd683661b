use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{AppError, Decision, Organization, OrganizationDirectory, OrganizationStatus};
use sqlx::{FromRow, Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str =
    "id, name, email, description, status, created_at, contact_person, specialties";

#[derive(FromRow)]
struct OrganizationRow {
    id: String,
    name: String,
    email: String,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
    contact_person: String,
    specialties: Vec<String>,
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = AppError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        let status = OrganizationStatus::parse(&row.status).ok_or_else(|| {
            AppError::database(format!(
                "Organization {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        Ok(Organization {
            id: row.id,
            name: row.name,
            email: row.email,
            description: row.description,
            status,
            created_at: row.created_at,
            contact_person: row.contact_person,
            specialties: row.specialties,
        })
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Organization {id} not found"))
}

/// Postgres-backed organization store.
#[derive(Debug, Clone)]
pub struct PgOrganizationDirectory {
    pool: Pool<Postgres>,
}

impl PgOrganizationDirectory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn current_status(&self, id: &str) -> Result<Option<OrganizationStatus>, AppError> {
        let status: Option<String> =
            sqlx::query_scalar("SELECT status FROM organizations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(SqlxErrorExt::into_app_error)?;
        Ok(status.as_deref().and_then(OrganizationStatus::parse))
    }
}

#[async_trait]
impl OrganizationDirectory for PgOrganizationDirectory {
    async fn list(&self) -> Result<Vec<Organization>, AppError> {
        let rows = sqlx::query_as::<_, OrganizationRow>(&format!(
            "SELECT {COLUMNS} FROM organizations ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        rows.into_iter().map(Organization::try_from).collect()
    }

    async fn get(&self, id: &str) -> Result<Organization, AppError> {
        sqlx::query_as::<_, OrganizationRow>(&format!(
            "SELECT {COLUMNS} FROM organizations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?
        .ok_or_else(|| not_found(id))
        .and_then(Organization::try_from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>, AppError> {
        sqlx::query_as::<_, OrganizationRow>(&format!(
            "SELECT {COLUMNS} FROM organizations WHERE LOWER(email) = LOWER($1) \
             ORDER BY created_at ASC, id ASC LIMIT 1"
        ))
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?
        .map(Organization::try_from)
        .transpose()
    }

    async fn decide(&self, id: &str, decision: Decision) -> Result<Organization, AppError> {
        let target = decision.target();

        // Only pending records (or records already carrying this outcome) move.
        let updated = sqlx::query_as::<_, OrganizationRow>(&format!(
            "UPDATE organizations SET status = $2 \
             WHERE id = $1 AND status IN ('pending', $2) \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(target.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        match updated {
            Some(row) => {
                tracing::info!(organization_id = id, status = %target, "Organization status updated");
                Organization::try_from(row)
            }
            None => {
                let current = self.current_status(id).await?.ok_or_else(|| not_found(id))?;
                decision.apply_to(current)?;
                // The row moved between the two statements.
                Err(AppError::conflict(format!(
                    "Organization {id} changed concurrently, reload and try again"
                )))
            }
        }
    }

    async fn seed(&self, records: Vec<Organization>) -> Result<usize, AppError> {
        let mut inserted = 0;
        for org in records {
            let result = sqlx::query(
                r#"
                INSERT INTO organizations
                    (id, name, email, description, status, created_at, contact_person, specialties)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&org.id)
            .bind(&org.name)
            .bind(&org.email)
            .bind(&org.description)
            .bind(org.status.as_str())
            .bind(org.created_at)
            .bind(&org.contact_person)
            .bind(&org.specialties)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
            inserted += result.rows_affected() as usize;
        }
        Ok(inserted)
    }
}
