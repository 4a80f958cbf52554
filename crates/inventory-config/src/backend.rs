//! Backend selection for the store and the cache.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where items and users are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// MySQL through an SQLx pool.
    #[default]
    Mysql,
    /// Process-local maps, lost on restart.
    Memory,
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mysql => write!(f, "mysql"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Which cache sits in front of the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Redis through a deadpool connection pool.
    #[default]
    Redis,
    /// Process-local moka cache.
    Memory,
    /// Every read misses and every write is dropped.
    Disabled,
}

impl CacheBackend {
    /// Returns true if this backend needs a Redis connection.
    #[must_use]
    pub const fn uses_redis(&self) -> bool {
        matches!(self, Self::Redis)
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis => write!(f, "redis"),
            Self::Memory => write!(f, "memory"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}
