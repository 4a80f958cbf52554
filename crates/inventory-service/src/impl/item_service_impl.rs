//! Item service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, DEFAULT_TTL};
use crate::dto::ItemRequest;
use crate::item_service::ItemService;
use async_trait::async_trait;
use inventory_core::{InventoryError, InventoryResult, Item, ItemId, NewItem, ValidateExt};
use inventory_repository::ItemRepository;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Message returned when an item name is already taken.
pub const DUPLICATE_ITEM_MESSAGE: &str = "Item already exists.";

/// Item service backed by a store and a read-through cache.
pub struct ItemServiceImpl {
    item_repository: Arc<dyn ItemRepository>,
    cache: Arc<dyn CacheInterface>,
    ttl: Duration,
    /// Serializes the read-modify-write of the cached item list.
    list_lock: Mutex<()>,
}

impl ItemServiceImpl {
    /// Creates a new item service with the default cache TTL.
    pub fn new(item_repository: Arc<dyn ItemRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self::with_ttl(item_repository, cache, DEFAULT_TTL)
    }

    /// Creates a new item service with a custom cache TTL.
    pub fn with_ttl(
        item_repository: Arc<dyn ItemRepository>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            item_repository,
            cache,
            ttl,
            list_lock: Mutex::new(()),
        }
    }

    /// Reads a cache entry, treating cache errors as a miss.
    async fn cached<T: DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache read failed for key '{}': {}", key, e);
                None
            }
        }
    }

    /// Writes a cache entry with a fresh TTL; failures are logged only.
    async fn cache_put<T: Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set(key, value, self.ttl).await {
            warn!("Cache write failed for key '{}': {}", key, e);
        }
    }

    async fn cache_evict(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!("Cache delete failed for key '{}': {}", key, e);
        }
    }

    /// Looks up an item through its cache entry, falling back to the store.
    async fn resolve(&self, id: ItemId) -> InventoryResult<Item> {
        let key = cache_keys::item_by_id(id);

        if let Some(item) = self.cached::<Item>(&key).await {
            debug!("Item {} served from cache", id);
            return Ok(item);
        }

        let item = self.item_repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Item not found with id: {}", id);
            InventoryError::not_found("Item", id)
        })?;

        self.cache_put(&key, &item).await;
        Ok(item)
    }

    /// Records a newly created item in the cached list snapshot.
    ///
    /// Appends when a snapshot exists, otherwise rebuilds it from the store.
    async fn record_in_item_list(&self, item: &Item) {
        let key = cache_keys::item_list();
        let _guard = self.list_lock.lock().await;

        if let Some(mut items) = self.cached::<Vec<Item>>(&key).await {
            items.push(item.clone());
            self.cache_put(&key, &items).await;
            info!("Added new item to the cached item list");
            return;
        }

        match self.item_repository.find_all().await {
            Ok(items) => {
                self.cache_put(&key, &items).await;
                info!("Fetched item list from store and cached it with the new item");
            }
            Err(e) => warn!("Could not rebuild cached item list: {}", e),
        }
    }

    async fn ensure_name_available(&self, name: &str, owner: Option<ItemId>) -> InventoryResult<()> {
        match self.item_repository.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != owner => {
                warn!("Item name already taken: {}", name);
                Err(InventoryError::duplicate(DUPLICATE_ITEM_MESSAGE))
            }
            _ => Ok(()),
        }
    }
}

/// Normalizes store-level unique violations to the item duplicate message.
fn duplicate_as_item_error(err: InventoryError) -> InventoryError {
    match err {
        InventoryError::Duplicate(_) => InventoryError::duplicate(DUPLICATE_ITEM_MESSAGE),
        other => other,
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    async fn create_item(&self, request: ItemRequest) -> InventoryResult<Item> {
        debug!("Creating item: {}", request.name);

        request.validate_request()?;
        self.ensure_name_available(&request.name, None).await?;

        let item = self
            .item_repository
            .create(&NewItem::from(request))
            .await
            .map_err(duplicate_as_item_error)?;

        info!("Item created: {} ({})", item.id, item.name);

        self.record_in_item_list(&item).await;
        Ok(item)
    }

    async fn list_items(&self) -> InventoryResult<Vec<Item>> {
        debug!("Listing items");

        let key = cache_keys::item_list();
        if let Some(items) = self.cached::<Vec<Item>>(&key).await {
            info!("Fetched item list from cache");
            return Ok(items);
        }

        let items = self.item_repository.find_all().await?;
        if items.is_empty() {
            warn!("No items found when fetching item list");
            return Err(InventoryError::EmptyCollection("items"));
        }

        self.cache_put(&key, &items).await;
        info!("Fetched item list from store and cached it");
        Ok(items)
    }

    async fn get_item(&self, id: ItemId) -> InventoryResult<Item> {
        debug!("Getting item: {}", id);

        let item = self.resolve(id).await?;
        info!("Item details fetched for id: {}", id);
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, request: ItemRequest) -> InventoryResult<Item> {
        debug!("Updating item: {}", id);

        let current = self.resolve(id).await?;

        request.validate_request()?;
        self.ensure_name_available(&request.name, Some(id)).await?;

        let updated = self
            .item_repository
            .update(&current.with_changes(&NewItem::from(request)))
            .await
            .map_err(duplicate_as_item_error)?;

        self.cache_put(&cache_keys::item_by_id(id), &updated).await;

        info!("Item updated: {}", id);
        Ok(updated)
    }

    async fn delete_item(&self, id: ItemId) -> InventoryResult<()> {
        debug!("Deleting item: {}", id);

        let item = self.resolve(id).await?;

        if !self.item_repository.delete(item.id).await? {
            debug!("Item {} was already gone from the store", id);
        }

        self.cache_evict(&cache_keys::item_by_id(id)).await;

        info!("Item deleted with id: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use inventory_repository::InMemoryItemRepository;
    use mockall::mock;
    use tokio::task::JoinSet;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn find_all(&self) -> InventoryResult<Vec<Item>>;
            async fn find_by_id(&self, id: ItemId) -> InventoryResult<Option<Item>>;
            async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Item>>;
            async fn create(&self, item: &NewItem) -> InventoryResult<Item>;
            async fn update(&self, item: &Item) -> InventoryResult<Item>;
            async fn delete(&self, id: ItemId) -> InventoryResult<bool>;
        }
    }

    /// Cache whose every operation fails.
    struct UnavailableCache;

    #[async_trait]
    impl CacheInterface for UnavailableCache {
        async fn get_raw(&self, _key: &str) -> InventoryResult<Option<String>> {
            Err(InventoryError::Cache("connection refused".to_string()))
        }

        async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> InventoryResult<()> {
            Err(InventoryError::Cache("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> InventoryResult<bool> {
            Err(InventoryError::Cache("connection refused".to_string()))
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    /// Cache that records the TTL of every write.
    #[derive(Default)]
    struct RecordingCache {
        inner: InMemoryCache,
        writes: std::sync::Mutex<Vec<(String, Duration)>>,
    }

    impl RecordingCache {
        fn writes(&self) -> Vec<(String, Duration)> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CacheInterface for RecordingCache {
        async fn get_raw(&self, key: &str) -> InventoryResult<Option<String>> {
            self.inner.get_raw(key).await
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> InventoryResult<()> {
            self.writes.lock().unwrap().push((key.to_string(), ttl));
            self.inner.set_raw(key, value, ttl).await
        }

        async fn delete(&self, key: &str) -> InventoryResult<bool> {
            self.inner.delete(key).await
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    struct Fixture {
        service: ItemServiceImpl,
        repo: Arc<InMemoryItemRepository>,
        cache: Arc<InMemoryCache>,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryItemRepository::new());
        let cache = Arc::new(InMemoryCache::new());
        let service = ItemServiceImpl::new(repo.clone(), cache.clone());
        Fixture { service, repo, cache }
    }

    async fn cached_list(cache: &InMemoryCache) -> Option<Vec<Item>> {
        cache.get::<Vec<Item>>(cache_keys::ITEM_LIST).await.unwrap()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_get_from_store() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();

        assert_eq!(created, Item::new(ItemId(1), "Widget", "desc"));
        assert_eq!(f.repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(f.service.get_item(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_validates_request() {
        let f = fixture();
        let result = f.service.create_item(ItemRequest::new("  ", "")).await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
        assert!(f.repo.is_empty().await);
        assert!(!f.cache.contains(cache_keys::ITEM_LIST));
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected_and_cache_untouched() {
        let f = fixture();
        f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        let snapshot = cached_list(&f.cache).await;

        let result = f.service.create_item(ItemRequest::new("Widget", "other")).await;

        match result {
            Err(InventoryError::Duplicate(message)) => assert_eq!(message, DUPLICATE_ITEM_MESSAGE),
            other => panic!("Expected duplicate error, got {:?}", other),
        }
        assert_eq!(f.repo.len().await, 1);
        assert_eq!(cached_list(&f.cache).await, snapshot);
    }

    #[tokio::test]
    async fn test_create_rebuilds_list_when_not_cached() {
        let f = fixture();
        f.repo.create(&NewItem::new("Existing", "")).await.unwrap();

        f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();

        let list = cached_list(&f.cache).await.unwrap();
        assert_eq!(names(&list), vec!["Existing", "Widget"]);
    }

    #[tokio::test]
    async fn test_create_appends_to_cached_list() {
        let f = fixture();
        let stale = vec![Item::new(ItemId(40), "Ghost", "")];
        f.cache.set(cache_keys::ITEM_LIST, &stale, DEFAULT_TTL).await.unwrap();

        f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();

        // The snapshot is appended to, not rebuilt from the store
        let list = cached_list(&f.cache).await.unwrap();
        assert_eq!(names(&list), vec!["Ghost", "Widget"]);
    }

    #[tokio::test]
    async fn test_list_empty_store_is_not_found() {
        let f = fixture();
        let err = f.service.list_items().await.unwrap_err();

        assert!(matches!(err, InventoryError::EmptyCollection("items")));
        assert_eq!(err.to_string(), "No items found");
        assert!(!f.cache.contains(cache_keys::ITEM_LIST));
    }

    #[tokio::test]
    async fn test_list_after_create_includes_item() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();

        let items = f.service.list_items().await.unwrap();
        assert!(items.contains(&created));
    }

    #[tokio::test]
    async fn test_list_caches_store_result() {
        let f = fixture();
        f.repo.create(&NewItem::new("b", "")).await.unwrap();
        f.repo.create(&NewItem::new("a", "")).await.unwrap();

        let items = f.service.list_items().await.unwrap();
        assert_eq!(names(&items), vec!["b", "a"]);
        assert_eq!(cached_list(&f.cache).await, Some(items));
    }

    #[tokio::test]
    async fn test_cached_list_served_without_store() {
        let mut repo = MockItemRepo::new();
        repo.expect_find_all().never();
        let cache = Arc::new(InMemoryCache::new());
        let snapshot = vec![Item::new(ItemId(1), "Widget", "desc")];
        cache.set(cache_keys::ITEM_LIST, &snapshot, DEFAULT_TTL).await.unwrap();

        let service = ItemServiceImpl::new(Arc::new(repo), cache);

        assert_eq!(service.list_items().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_cached_item_served_without_store() {
        let mut repo = MockItemRepo::new();
        repo.expect_find_by_id().never();
        let cache = Arc::new(InMemoryCache::new());
        let item = Item::new(ItemId(7), "Widget", "desc");
        cache.set(&cache_keys::item_by_id(item.id), &item, DEFAULT_TTL).await.unwrap();

        let service = ItemServiceImpl::new(Arc::new(repo), cache);

        assert_eq!(service.get_item(ItemId(7)).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_get_populates_item_cache() {
        let mut repo = MockItemRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(Item::new(id, "Widget", "desc"))));
        let cache = Arc::new(InMemoryCache::new());
        let service = ItemServiceImpl::new(Arc::new(repo), cache.clone());

        let first = service.get_item(ItemId(3)).await.unwrap();
        let second = service.get_item(ItemId(3)).await.unwrap();

        assert_eq!(first, second);
        assert!(cache.contains("item_3"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let f = fixture();
        let err = f.service.get_item(ItemId(999)).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Item not found");
        assert!(!f.cache.contains("item_999"));
    }

    #[tokio::test]
    async fn test_update_then_get_returns_new_fields() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();
        f.service.get_item(created.id).await.unwrap();

        let updated = f
            .service
            .update_item(created.id, ItemRequest::new("Widget2", "desc2"))
            .await
            .unwrap();

        assert_eq!(updated, Item::new(created.id, "Widget2", "desc2"));
        assert_eq!(f.service.get_item(created.id).await.unwrap(), updated);
        assert_eq!(f.repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_leaves_cached_list_stale() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();
        assert!(f.cache.contains(cache_keys::ITEM_LIST));

        f.service
            .update_item(created.id, ItemRequest::new("Widget2", "desc2"))
            .await
            .unwrap();

        let items = f.service.list_items().await.unwrap();
        assert_eq!(names(&items), vec!["Widget"]);
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_allowed() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "old")).await.unwrap();

        let updated = f
            .service
            .update_item(created.id, ItemRequest::new("Widget", "new"))
            .await
            .unwrap();
        assert_eq!(updated.description, "new");
    }

    #[tokio::test]
    async fn test_update_to_taken_name_is_duplicate() {
        let f = fixture();
        f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        let gadget = f.service.create_item(ItemRequest::new("Gadget", "")).await.unwrap();

        let result = f.service.update_item(gadget.id, ItemRequest::new("Widget", "")).await;

        assert!(matches!(result, Err(InventoryError::Duplicate(_))));
        assert_eq!(f.repo.find_by_id(gadget.id).await.unwrap().unwrap().name, "Gadget");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let f = fixture();
        let result = f.service.update_item(ItemId(5), ItemRequest::new("Widget", "")).await;
        assert!(matches!(result, Err(InventoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_checked_before_validation() {
        let f = fixture();
        let result = f.service.update_item(ItemId(5), ItemRequest::new("", "")).await;
        assert!(matches!(result, Err(InventoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_invalid_payload() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();

        let result = f.service.update_item(created.id, ItemRequest::new("", "")).await;
        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        f.service.get_item(created.id).await.unwrap();
        assert!(f.cache.contains(&cache_keys::item_by_id(created.id)));

        f.service.delete_item(created.id).await.unwrap();

        assert!(!f.cache.contains(&cache_keys::item_by_id(created.id)));
        assert!(f.service.get_item(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_leaves_cached_list_stale() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();

        f.service.delete_item(created.id).await.unwrap();

        let items = f.service.list_items().await.unwrap();
        assert_eq!(items, vec![created]);
        assert!(f.repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let f = fixture();
        assert!(f.service.delete_item(ItemId(1)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_cached_item_already_gone_from_store() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        f.service.get_item(created.id).await.unwrap();
        f.repo.remove_row(created.id).await;

        f.service.delete_item(created.id).await.unwrap();

        assert!(!f.cache.contains(&cache_keys::item_by_id(created.id)));
    }

    #[tokio::test]
    async fn test_cache_failures_do_not_fail_requests() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let service = ItemServiceImpl::new(repo.clone(), Arc::new(UnavailableCache));

        let created = service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();
        assert_eq!(repo.len().await, 1);

        assert_eq!(service.list_items().await.unwrap(), vec![created.clone()]);
        assert_eq!(service.get_item(created.id).await.unwrap(), created);

        let updated = service
            .update_item(created.id, ItemRequest::new("Widget2", ""))
            .await
            .unwrap();
        assert_eq!(updated.name, "Widget2");

        service.delete_item(created.id).await.unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_treated_as_miss() {
        let f = fixture();
        let created = f.service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        f.cache
            .set_raw(&cache_keys::item_by_id(created.id), "garbage", DEFAULT_TTL)
            .await
            .unwrap();

        assert_eq!(f.service.get_item(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockItemRepo::new();
        repo.expect_find_all()
            .returning(|| Err(InventoryError::Database("connection lost".to_string())));
        let service = ItemServiceImpl::new(Arc::new(repo), Arc::new(InMemoryCache::new()));

        assert!(matches!(service.list_items().await, Err(InventoryError::Database(_))));
    }

    #[tokio::test]
    async fn test_store_unique_violation_maps_to_duplicate_message() {
        let mut repo = MockItemRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(InventoryError::Duplicate("Duplicate entry 'Widget'".to_string())));
        let cache = Arc::new(InMemoryCache::new());
        let service = ItemServiceImpl::new(Arc::new(repo), cache.clone());

        match service.create_item(ItemRequest::new("Widget", "")).await {
            Err(InventoryError::Duplicate(message)) => assert_eq!(message, DUPLICATE_ITEM_MESSAGE),
            other => panic!("Expected duplicate error, got {:?}", other),
        }
        assert!(!cache.contains(cache_keys::ITEM_LIST));
    }

    #[test]
    fn test_default_ttl_is_fifteen_minutes() {
        assert_eq!(DEFAULT_TTL, Duration::from_secs(900));
    }

    #[tokio::test]
    async fn test_every_cache_write_uses_configured_ttl() {
        let ttl = Duration::from_secs(42);
        let cache = Arc::new(RecordingCache::default());
        let service = ItemServiceImpl::with_ttl(Arc::new(InMemoryItemRepository::new()), cache.clone(), ttl);

        // Rebuild, then append
        let widget = service.create_item(ItemRequest::new("Widget", "")).await.unwrap();
        service.create_item(ItemRequest::new("Gadget", "")).await.unwrap();

        cache.delete(cache_keys::ITEM_LIST).await.unwrap();
        service.list_items().await.unwrap();
        service.get_item(widget.id).await.unwrap();
        service
            .update_item(widget.id, ItemRequest::new("Widget2", ""))
            .await
            .unwrap();

        let writes = cache.writes();
        let keys: Vec<&str> = writes.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["item_list", "item_list", "item_list", "item_1", "item_1"]);
        assert!(writes.iter().all(|(_, written)| *written == ttl));
    }

    #[tokio::test]
    async fn test_default_service_writes_with_default_ttl() {
        let cache = Arc::new(RecordingCache::default());
        let service = ItemServiceImpl::new(Arc::new(InMemoryItemRepository::new()), cache.clone());

        service.create_item(ItemRequest::new("Widget", "")).await.unwrap();

        assert_eq!(cache.writes(), vec![("item_list".to_string(), DEFAULT_TTL)]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_all_recorded_in_list() {
        let f = fixture();
        f.service.create_item(ItemRequest::new("seed", "")).await.unwrap();
        let service = Arc::new(f.service);

        let mut tasks = JoinSet::new();
        for i in 0..20 {
            let service = Arc::clone(&service);
            tasks.spawn(async move { service.create_item(ItemRequest::new(format!("item-{i}"), "")).await });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        let list = cached_list(&f.cache).await.unwrap();
        assert_eq!(list.len(), 21);
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let f = fixture();

        let created = f.service.create_item(ItemRequest::new("Widget", "desc")).await.unwrap();
        assert_eq!(created.id, ItemId(1));

        let fetched = f.service.get_item(ItemId(1)).await.unwrap();
        assert_eq!(
            serde_json::to_value(&fetched).unwrap(),
            serde_json::json!({"id": 1, "name": "Widget", "description": "desc"})
        );

        assert!(f.service.get_item(ItemId(999)).await.unwrap_err().is_not_found());

        let updated = f
            .service
            .update_item(ItemId(1), ItemRequest::new("Widget2", "desc2"))
            .await
            .unwrap();
        assert_eq!(updated, Item::new(ItemId(1), "Widget2", "desc2"));

        f.service.delete_item(ItemId(1)).await.unwrap();
        assert!(f.service.get_item(ItemId(1)).await.unwrap_err().is_not_found());
    }
}
