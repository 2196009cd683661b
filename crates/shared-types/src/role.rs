use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry point for sessions that are missing, expired, or failed to resolve.
pub const LOGIN_PATH: &str = "/auth/login";

/// Session role. The role alone decides which dashboard a session may view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organization,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Organization, Role::User];

    /// Lowercase tag stored in JWT claims and the `users.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organization => "organization",
            Role::User => "user",
        }
    }

    /// Parse a role tag. Unknown tags yield `None`; callers treat that as
    /// "no valid session" rather than guessing a role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "organization" => Some(Role::Organization),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Canonical dashboard for this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Organization => "/organization/dashboard",
            Role::User => "/dashboard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Organization => "Organization",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
