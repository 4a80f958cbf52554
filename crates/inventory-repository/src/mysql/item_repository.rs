//! MySQL item repository implementation.

use super::inserted_id;
use crate::{traits::ItemRepository, DatabasePoolInterface};
use async_trait::async_trait;
use inventory_core::{InventoryError, InventoryResult, Item, ItemId, NewItem};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL item repository implementation.
#[derive(Clone)]
pub struct MySqlItemRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlItemRepository {
    /// Creates a new MySQL item repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an item.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn find_all(&self) -> InventoryResult<Vec<Item>> {
        debug!("Finding all items");

        let rows = sqlx::query_as::<_, ItemRow>("SELECT id, name, description FROM items ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: ItemId) -> InventoryResult<Option<Item>> {
        debug!("Finding item by id: {}", id);

        let row = sqlx::query_as::<_, ItemRow>("SELECT id, name, description FROM items WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Item::from))
    }

    async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Item>> {
        debug!("Finding item by name: {}", name);

        let row = sqlx::query_as::<_, ItemRow>("SELECT id, name, description FROM items WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Item::from))
    }

    async fn create(&self, item: &NewItem) -> InventoryResult<Item> {
        debug!("Saving new item: {}", item.name);

        // MySQL doesn't support RETURNING, so take the generated key from the result
        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(&item.name)
            .bind(&item.description)
            .execute(self.pool.inner())
            .await?;

        let id = inserted_id(result.last_insert_id())?;
        Ok(item.clone().into_item(ItemId(id)))
    }

    async fn update(&self, item: &Item) -> InventoryResult<Item> {
        debug!("Updating item: {}", item.id);

        sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        // Re-read; affected-row counts are zero when nothing changed
        self.find_by_id(item.id)
            .await?
            .ok_or_else(|| InventoryError::not_found("Item", item.id))
    }

    async fn delete(&self, id: ItemId) -> InventoryResult<bool> {
        debug!("Deleting item: {}", id);

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
