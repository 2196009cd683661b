//! Postgres-backed directory checks. Skipped unless `TEST_DATABASE_URL` is set.

use chrono::Utc;
use pretty_assertions::assert_eq;
use server::repo::{PgOrganizationDirectory, PgUserDirectory, UserDirectory};
use shared_types::{AppErrorKind, OrganizationDirectory, OrganizationStatus, Role};
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;

/// Tests share one database; each truncates and reseeds under this lock.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

async fn test_pool() -> Option<Pool<Postgres>> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE organizations, users")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    Some(pool)
}

#[tokio::test]
async fn test_pg_seed_is_idempotent_and_ordered() {
    let _guard = TEST_MUTEX.lock().await;
    let Some(pool) = test_pool().await else { return };
    let dir = PgOrganizationDirectory::new(pool);

    let first = dir.seed(server::seed::demo_organizations(Utc::now())).await.unwrap();
    let second = dir.seed(server::seed::demo_organizations(Utc::now())).await.unwrap();
    assert_eq!(first, 3);
    assert_eq!(second, 0);

    let ids: Vec<String> = dir.list().await.unwrap().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["org-1", "org-2", "org-3"]);
}

#[tokio::test]
async fn test_pg_decisions_follow_the_lifecycle() {
    let _guard = TEST_MUTEX.lock().await;
    let Some(pool) = test_pool().await else { return };
    let dir = PgOrganizationDirectory::new(pool);
    dir.seed(server::seed::demo_organizations(Utc::now())).await.unwrap();

    let approved = dir.approve("org-2").await.unwrap();
    assert_eq!(approved.status, OrganizationStatus::Approved);
    assert_eq!(dir.approve("org-2").await.unwrap().status, OrganizationStatus::Approved);

    let conflict = dir.reject("org-2").await.unwrap_err();
    assert_eq!(conflict.kind, AppErrorKind::Conflict);

    let missing = dir.reject("org-404").await.unwrap_err();
    assert_eq!(missing.kind, AppErrorKind::NotFound);

    let untouched = dir.get("org-3").await.unwrap();
    assert_eq!(untouched.status, OrganizationStatus::Pending);
}

#[tokio::test]
async fn test_pg_users_are_found_by_email_case_insensitively() {
    let _guard = TEST_MUTEX.lock().await;
    let Some(pool) = test_pool().await else { return };
    let users = PgUserDirectory::new(pool);
    users.seed(server::seed::demo_accounts().unwrap()).await.unwrap();

    let found = users.find_by_email("ADMIN@ushuari.com").await.unwrap().unwrap();
    assert_eq!(found.id, "usr-admin");
    assert_eq!(found.role, Role::Admin);
    assert!(users.find_by_email("ghost@ushuari.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_pg_and_memory_agree_on_padded_email_lookup() {
    let _guard = TEST_MUTEX.lock().await;
    let Some(pool) = test_pool().await else { return };
    let now = Utc::now();
    let pg = PgOrganizationDirectory::new(pool);
    pg.seed(server::seed::demo_organizations(now)).await.unwrap();
    let memory = shared_types::InMemoryOrganizationDirectory::new(server::seed::demo_organizations(now));

    let query = "  Help@TenantRightsGroup.org ";
    let from_pg = pg.find_by_email(query).await.unwrap().map(|o| o.id);
    let from_memory = memory.find_by_email(query).await.unwrap().map(|o| o.id);
    assert_eq!(from_pg, Some("org-2".to_string()));
    assert_eq!(from_memory, from_pg);
}
