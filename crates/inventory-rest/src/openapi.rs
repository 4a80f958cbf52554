//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use inventory_core::{ErrorResponse, FieldError, Item, ItemId};
use inventory_service::{
    AccessTokenResponse, ComponentStatus, CredentialsRequest, HealthStatus, ItemRequest, MessageResponse,
    RefreshTokenRequest, TokenResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Inventory Cloud API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Cloud API",
        version = "1.0.0",
        description = "Item inventory with a read-through cache and JWT authentication"
    ),
    paths(
        // Item endpoints
        crate::controllers::item_controller::create_item,
        crate::controllers::item_controller::list_items,
        crate::controllers::item_controller::get_item,
        crate::controllers::item_controller::update_item,
        crate::controllers::item_controller::delete_item,
        // Auth endpoints
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        crate::controllers::auth_controller::refresh_token,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Item,
            ItemId,
            ItemRequest,
            ErrorResponse,
            FieldError,
            CredentialsRequest,
            RefreshTokenRequest,
            TokenResponse,
            AccessTokenResponse,
            MessageResponse,
            HealthResponse,
            HealthStatus,
            ComponentStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "items", description = "Item management endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_item_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/items/"));
        assert!(doc.paths.paths.contains_key("/item-list/"));
        assert!(doc.paths.paths.contains_key("/items/{id}/"));
        assert!(doc.paths.paths.contains_key("/token/refresh"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
