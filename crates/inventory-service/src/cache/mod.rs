//! Caching infrastructure for the service layer.
//!
//! `CacheInterface` is the seam the item service talks to. Redis backs it in
//! production, a moka cache serves tests and single-process runs, and the
//! disabled Redis service turns every read into a miss.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::InMemoryCache;
pub use redis_cache::{create_redis_pool, RedisCacheService};

use std::time::Duration;

/// Default TTL for cached items (15 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(900);
