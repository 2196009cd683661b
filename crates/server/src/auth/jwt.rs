use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, Role, SessionUser};

/// Token type discriminator. A refresh token is never accepted as an access token.
const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims stored in access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub name: String,
    pub email: String,
    /// Unknown role tags fail to decode, so such a token never yields a session.
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
    pub typ: String,
}

impl Claims {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

fn jwt_secret() -> Result<String, AppError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(AppError::internal("JWT_SECRET must be set")),
    }
}

fn issue(user: &SessionUser, typ: &str, lifetime: Duration) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
        typ: typ.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
}

fn decode_claims(token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

pub fn access_token_minutes() -> i64 {
    crate::config::session_settings().access_token_minutes
}

pub fn refresh_token_days() -> i64 {
    crate::config::session_settings().refresh_token_days
}

pub fn create_access_token(user: &SessionUser) -> Result<String, AppError> {
    issue(user, TOKEN_TYPE_ACCESS, Duration::minutes(access_token_minutes()))
}

pub fn create_refresh_token(user: &SessionUser) -> Result<String, AppError> {
    issue(user, TOKEN_TYPE_REFRESH, Duration::days(refresh_token_days()))
}

/// Validate an access token. Rejects refresh tokens.
pub fn validate_access_token(token: &str) -> Result<Claims, AppError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(AppError::unauthorized("Invalid or expired token"));
    }
    Ok(claims)
}

/// Validate a refresh token. Rejects access tokens.
pub fn validate_refresh_token(token: &str) -> Result<Claims, AppError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(AppError::unauthorized("Invalid or expired token"));
    }
    Ok(claims)
}
