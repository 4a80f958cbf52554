//! Repository trait definitions.

use async_trait::async_trait;
use inventory_core::{Interface, InventoryResult, Item, ItemId, NewItem, NewUser, User};

/// Item repository trait.
///
/// The store is the source of truth for items; ids are assigned on insert.
#[async_trait]
pub trait ItemRepository: Interface + Send + Sync {
    /// Returns every item ordered by id.
    async fn find_all(&self) -> InventoryResult<Vec<Item>>;

    /// Finds an item by ID.
    async fn find_by_id(&self, id: ItemId) -> InventoryResult<Option<Item>>;

    /// Finds an item by its unique name.
    async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Item>>;

    /// Inserts a new item and returns it with its assigned id.
    ///
    /// Fails with `Duplicate` when the name is already taken.
    async fn create(&self, item: &NewItem) -> InventoryResult<Item>;

    /// Replaces name and description of an existing item.
    async fn update(&self, item: &Item) -> InventoryResult<Item>;

    /// Deletes an item by ID. Returns false if no row was removed.
    async fn delete(&self, id: ItemId) -> InventoryResult<bool>;
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> InventoryResult<Option<User>>;

    /// Checks if a username exists.
    async fn exists_by_username(&self, username: &str) -> InventoryResult<bool>;

    /// Saves a new user.
    async fn create(&self, user: &NewUser) -> InventoryResult<User>;
}
