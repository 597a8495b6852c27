//! Extractor for the authenticated user's ID.

use super::jwt::JwtClaims;
use crate::errors::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated user, resolved from JWT claims.
///
/// Requires `jwt_auth_middleware` to have run on the route; the middleware
/// inserts verified `JwtClaims` into request extensions and this extractor
/// parses the `sub` claim into a user ID.
///
/// # Example
/// ```ignore
/// use axum_helpers::AuthUser;
///
/// async fn list_tasks(AuthUser(user_id): AuthUser) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<JwtClaims>()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthUser(user_id))
    }
}
