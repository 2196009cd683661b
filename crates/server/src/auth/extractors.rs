use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Role};

use super::jwt::Claims;

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Role codes for [`RoleRequired`].
pub mod role_code {
    pub const ADMIN: u8 = 0;
    pub const ORGANIZATION: u8 = 1;
    pub const USER: u8 = 2;
}

fn role_for(code: u8) -> Role {
    match code {
        role_code::ADMIN => Role::Admin,
        role_code::ORGANIZATION => Role::Organization,
        _ => Role::User,
    }
}

/// Check that `claims` carry exactly the `required` role.
pub fn ensure_role(claims: &Claims, required: Role) -> Result<(), AppError> {
    if claims.role != required {
        return Err(AppError::forbidden(format!(
            "{} role required",
            required.display_name()
        )));
    }
    Ok(())
}

/// Extractor that requires authentication AND one exact role.
/// Returns 401 if unauthenticated, 403 for any other role.
pub struct RoleRequired<const ROLE: u8>(pub Claims);

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthRequired(claims) = AuthRequired::from_request_parts(parts, state).await?;
        ensure_role(&claims, role_for(ROLE))?;
        Ok(RoleRequired(claims))
    }
}

pub type AdminRequired = RoleRequired<{ role_code::ADMIN }>;
pub type OrganizationRequired = RoleRequired<{ role_code::ORGANIZATION }>;
