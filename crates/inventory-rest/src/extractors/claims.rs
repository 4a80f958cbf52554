//! JWT claims extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use inventory_core::InventoryError;
use inventory_security::Claims;

/// Extractor for authenticated user claims.
///
/// Claims are placed in the request extensions by the auth middleware when
/// the bearer token is valid; their absence rejects the request with 401.
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| InventoryError::unauthorized("Missing authorization header"))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(InventoryError::unauthorized("Invalid authorization format").into());
        }

        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| InventoryError::unauthorized("Invalid or expired token"))?;

        Ok(AuthenticatedUser(claims))
    }
}
