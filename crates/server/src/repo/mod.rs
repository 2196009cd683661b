pub mod organization;
pub mod user;

pub use organization::PgOrganizationDirectory;
pub use user::{InMemoryUserDirectory, PgUserDirectory, UserDirectory, UserRecord};
