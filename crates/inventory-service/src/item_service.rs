//! Item service trait definition.

use crate::dto::ItemRequest;
use async_trait::async_trait;
use inventory_core::{Interface, InventoryResult, Item, ItemId};

/// Item service trait.
///
/// Reads go through the cache first; writes hit the store first and then
/// refresh the affected cache entries on a best-effort basis.
#[async_trait]
pub trait ItemService: Interface + Send + Sync {
    /// Creates a new item and records it in the cached item list.
    async fn create_item(&self, request: ItemRequest) -> InventoryResult<Item>;

    /// Lists all items, serving the cached snapshot when present.
    async fn list_items(&self) -> InventoryResult<Vec<Item>>;

    /// Gets an item by ID.
    async fn get_item(&self, id: ItemId) -> InventoryResult<Item>;

    /// Replaces an item's name and description.
    ///
    /// The cached item list is left as is.
    async fn update_item(&self, id: ItemId, request: ItemRequest) -> InventoryResult<Item>;

    /// Deletes an item.
    ///
    /// The cached item list is left as is.
    async fn delete_item(&self, id: ItemId) -> InventoryResult<()>;
}
