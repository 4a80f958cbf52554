//! Item management controller.

use crate::{
    extractors::{AuthenticatedUser, JsonBody, ValidatedJson},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use inventory_core::{ErrorResponse, InventoryError, Item, ItemId};
use inventory_service::ItemRequest;
use tracing::debug;

/// Creates the item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/", post(create_item))
        .route("/item-list/", get(list_items))
        .route("/items/:id/", get(get_item).put(update_item).delete(delete_item))
}

/// Parses a path id; anything that is not an integer names no item.
fn parse_item_id(raw: &str) -> Result<ItemId, AppError> {
    raw.parse::<ItemId>()
        .map_err(|_| AppError(InventoryError::not_found("Item", raw)))
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    debug!("Create item request from {}: {}", user.username, request.name);

    let item = state.item_service.create_item(request).await?;
    Ok(created(item))
}

/// List all items.
#[utoipa::path(
    get,
    path = "/item-list/",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 404, description = "No items found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_items(State(state): State<AppState>, user: AuthenticatedUser) -> ApiResult<Vec<Item>> {
    debug!("List items request from {}", user.username);

    let items = state.item_service.list_items().await?;
    ok(items)
}

/// Get an item by ID.
#[utoipa::path(
    get,
    path = "/items/{id}/",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Item> {
    debug!("Get item request from {}: {}", user.username, id);

    let id = parse_item_id(&id)?;
    let item = state.item_service.get_item(id).await?;
    ok(item)
}

/// Replace an item's name and description.
#[utoipa::path(
    put,
    path = "/items/{id}/",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, Response> {
    debug!("Update item request from {}: {}", user.username, id);

    // An unknown id is 404 whatever the body holds
    let id = parse_item_id(&id)?;
    state.item_service.get_item(id).await.map_err(AppError)?;

    let JsonBody(request) = JsonBody::<ItemRequest>::from_bytes(&body)?;
    let item = state.item_service.update_item(id, request).await.map_err(AppError)?;
    Ok(Json(item))
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/items/{id}/",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete item request from {}: {}", user.username, id);

    let id = parse_item_id(&id)?;
    state.item_service.delete_item(id).await?;
    Ok(no_content())
}
