pub mod error;
pub mod feature_flags;
pub mod models;

// Console domain
pub mod directory;
pub mod guard;
pub mod navigation;
pub mod organization;
pub mod role;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use directory::{InMemoryOrganizationDirectory, OrganizationDirectory};
pub use guard::{
    enforce, evaluate, landing_path, settle, sign_out, signed_in_home, GuardState, Navigator,
    RouteGuard, SessionMirror, SessionProvider,
};
pub use navigation::*;
pub use organization::*;
pub use role::*;
