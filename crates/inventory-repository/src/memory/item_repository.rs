//! In-memory item repository.

use crate::traits::ItemRepository;
use async_trait::async_trait;
use inventory_core::{InventoryError, InventoryResult, Item, ItemId, NewItem};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct ItemTable {
    rows: BTreeMap<ItemId, Item>,
    last_id: i64,
}

impl ItemTable {
    fn name_taken(&self, name: &str, except: Option<ItemId>) -> bool {
        self.rows
            .values()
            .any(|item| item.name == name && Some(item.id) != except)
    }
}

/// Item repository backed by an ordered map.
///
/// Ids are assigned from a counter that never reuses a value, like an
/// AUTO_INCREMENT column.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    table: RwLock<ItemTable>,
}

impl InMemoryItemRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns true if no items are stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }

    /// Removes a row without going through the repository contract.
    ///
    /// Simulates a concurrent writer deleting behind the cache's back.
    pub async fn remove_row(&self, id: ItemId) -> Option<Item> {
        self.table.write().await.rows.remove(&id)
    }
}

fn duplicate_name(name: &str) -> InventoryError {
    InventoryError::duplicate(format!("Item with name '{}' already exists", name))
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> InventoryResult<Vec<Item>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> InventoryResult<Option<Item>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Item>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|item| item.name == name)
            .cloned())
    }

    async fn create(&self, item: &NewItem) -> InventoryResult<Item> {
        let mut table = self.table.write().await;
        if table.name_taken(&item.name, None) {
            return Err(duplicate_name(&item.name));
        }

        table.last_id += 1;
        let created = item.clone().into_item(ItemId(table.last_id));
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, item: &Item) -> InventoryResult<Item> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&item.id) {
            return Err(InventoryError::not_found("Item", item.id));
        }
        if table.name_taken(&item.name, Some(item.id)) {
            return Err(duplicate_name(&item.name));
        }

        table.rows.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> InventoryResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
