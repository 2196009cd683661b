use async_trait::async_trait;
use shared_types::{AppError, Role, SessionUser};
use sqlx::{FromRow, Pool, Postgres};
use std::sync::RwLock;

use crate::error_convert::SqlxErrorExt;

/// A console account with its credential.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

impl UserRecord {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Account lookup for the session service.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Case-insensitive lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError>;

    async fn set_role(&self, id: &str, role: Role) -> Result<(), AppError>;

    /// Insert accounts whose id and email are not yet present.
    /// Returns the number inserted.
    async fn seed(&self, records: Vec<UserRecord>) -> Result<usize, AppError>;
}

fn poisoned() -> AppError {
    AppError::internal("User store lock poisoned")
}

/// Account store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.iter().find(|u| u.id == id).cloned())
    }

    async fn set_role(&self, id: &str, role: Role) -> Result<(), AppError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        let user = guard
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.role = role;
        Ok(())
    }

    async fn seed(&self, records: Vec<UserRecord>) -> Result<usize, AppError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        let mut inserted = 0;
        for record in records {
            let exists = guard
                .iter()
                .any(|u| u.id == record.id || u.email.eq_ignore_ascii_case(&record.email));
            if !exists {
                guard.push(record);
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

#[derive(FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    password_hash: String,
}

impl UserRow {
    /// Rows carrying an unknown role tag are skipped rather than guessed.
    fn into_record(self) -> Option<UserRecord> {
        let Some(role) = Role::parse(&self.role) else {
            tracing::warn!(user_id = %self.id, role = %self.role, "Ignoring account with unknown role");
            return None;
        };
        Some(UserRecord {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
            password_hash: self.password_hash,
        })
    }
}

/// Postgres-backed account store.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: Pool<Postgres>,
}

impl PgUserDirectory {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role, password_hash FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.and_then(UserRow::into_record))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.and_then(UserRow::into_record))
    }

    async fn set_role(&self, id: &str, role: Role) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET role = $1 WHERE id = $2")
            .bind(role.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    async fn seed(&self, records: Vec<UserRecord>) -> Result<usize, AppError> {
        let mut inserted = 0;
        for record in records {
            let result = sqlx::query(
                r#"
                INSERT INTO users (id, name, email, role, password_hash)
                SELECT $1, $2, $3, $4, $5
                WHERE NOT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = LOWER($3))
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(record.role.as_str())
            .bind(&record.password_hash)
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
            inserted += result.rows_affected() as usize;
        }
        Ok(inserted)
    }
}
