use axum::extract::FromRef;
use shared_types::{AppError, InMemoryOrganizationDirectory, Organization, OrganizationDirectory};
use sqlx::{Pool, Postgres};
use std::sync::{Arc, OnceLock};

use crate::repo::{InMemoryUserDirectory, PgOrganizationDirectory, PgUserDirectory, UserDirectory, UserRecord};

/// Shared application state. REST handlers receive it through `State`;
/// server functions read the process-wide copy via [`app_state`].
#[derive(Clone, FromRef)]
pub struct AppState {
    pub organizations: Arc<dyn OrganizationDirectory>,
    pub users: Arc<dyn UserDirectory>,
    /// Present when the Postgres backend is active.
    pub pool: Option<Pool<Postgres>>,
}

static STATE: OnceLock<AppState> = OnceLock::new();

impl AppState {
    pub fn in_memory(organizations: Vec<Organization>, users: Vec<UserRecord>) -> Self {
        Self {
            organizations: Arc::new(InMemoryOrganizationDirectory::new(organizations)),
            users: Arc::new(InMemoryUserDirectory::new(users)),
            pool: None,
        }
    }

    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            organizations: Arc::new(PgOrganizationDirectory::new(pool.clone())),
            users: Arc::new(PgUserDirectory::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Postgres when `DATABASE_URL` is set (migrations applied), otherwise
    /// empty in-memory stores.
    pub async fn from_env() -> Result<Self, AppError> {
        match crate::db::pool_from_env()? {
            Some(pool) => {
                crate::db::run_migrations(&pool).await?;
                tracing::info!("Using Postgres backend");
                Ok(Self::postgres(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory stores");
                Ok(Self::in_memory(Vec::new(), Vec::new()))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}

/// Publish the state for server functions. The first call wins.
pub fn install(state: AppState) -> &'static AppState {
    STATE.get_or_init(|| state)
}

/// State installed at startup.
pub fn app_state() -> Result<&'static AppState, AppError> {
    STATE
        .get()
        .ok_or_else(|| AppError::internal("Application state not initialized"))
}
