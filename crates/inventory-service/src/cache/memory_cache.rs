//! In-process cache with per-entry expiry.

use super::CacheInterface;
use async_trait::async_trait;
use inventory_core::InventoryResult;
use moka::{future::Cache, Expiry};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with.
struct WriteTtl;

impl Expiry<String, CacheEntry> for WriteTtl {
    fn expire_after_create(&self, _key: &String, entry: &CacheEntry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Moka-backed cache living in the service process.
///
/// Expired entries are reclaimed by moka's housekeeping, not only when read.
#[derive(Debug, Clone)]
pub struct InMemoryCache {
    entries: Cache<String, CacheEntry>,
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self {
            entries: Cache::builder().expire_after(WriteTtl).build(),
        }
    }
}

impl InMemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a live entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries still held after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> InventoryResult<Option<String>> {
        let value = self.entries.get(key).await.map(|entry| entry.value);

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> InventoryResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> InventoryResult<bool> {
        let deleted = self.entries.contains_key(key);
        self.entries.invalidate(key).await;

        debug!("Deleted key '{}': {}", key, deleted);
        Ok(deleted)
    }
}
