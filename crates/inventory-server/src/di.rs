//! Dependency wiring.
//!
//! Builds the `Arc<dyn Trait>` graph from configuration:
//!
//! ```text
//! database.backend  mysql  -> DatabasePool + MySql*Repository
//!                   memory -> InMemory*Repository
//! cache.backend     redis    -> RedisCacheService (deadpool pool)
//!                   memory   -> InMemoryCache
//!                   disabled -> RedisCacheService::disabled()
//! ```

use inventory_config::{AppConfig, CacheBackend, CacheConfig, DatabaseBackend, DatabaseConfig, RedisConfig};
use inventory_core::InventoryResult;
use inventory_repository::{
    DatabasePool, DatabasePoolInterface, InMemoryItemRepository, InMemoryUserRepository, ItemRepository,
    MySqlItemRepository, MySqlUserRepository, UserRepository,
};
use inventory_rest::AppState;
use inventory_security::{PasswordHasher, PasswordHasherInterface, TokenProvider};
use inventory_service::{
    create_redis_pool, AuthService, AuthServiceImpl, CacheInterface, HealthService, HealthServiceImpl, InMemoryCache,
    ItemService, ItemServiceImpl, RedisCacheService,
};
use std::sync::Arc;
use tracing::info;

/// Fully wired application services.
pub struct AppComponents {
    pub item_service: Arc<dyn ItemService>,
    pub auth_service: Arc<dyn AuthService>,
    pub health_service: Arc<dyn HealthService>,
    /// Present only for the MySQL backend.
    pub database_pool: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppComponents {
    /// Builds the REST application state.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.item_service.clone(),
            self.auth_service.clone(),
            self.health_service.clone(),
        )
    }

    /// Releases pooled connections.
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.database_pool {
            pool.close().await;
        }
    }
}

struct Repositories {
    items: Arc<dyn ItemRepository>,
    users: Arc<dyn UserRepository>,
    pool: Option<Arc<dyn DatabasePoolInterface>>,
}

/// Builds every component from configuration.
pub async fn build_components(config: &AppConfig) -> InventoryResult<AppComponents> {
    let repositories = build_repositories(&config.database).await?;
    let cache = build_cache(&config.cache, &config.redis).await?;

    let password_hasher: Arc<dyn PasswordHasherInterface> =
        Arc::new(PasswordHasher::with_cost(config.security.password_hash_cost));
    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    let health_service: Arc<dyn HealthService> =
        Arc::new(HealthServiceImpl::new(repositories.pool.clone(), cache.clone()));
    let item_service: Arc<dyn ItemService> = Arc::new(ItemServiceImpl::with_ttl(
        repositories.items,
        cache,
        config.cache.ttl(),
    ));
    let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
        repositories.users,
        password_hasher,
        token_provider,
    ));

    Ok(AppComponents {
        item_service,
        auth_service,
        health_service,
        database_pool: repositories.pool,
    })
}

async fn build_repositories(config: &DatabaseConfig) -> InventoryResult<Repositories> {
    info!("Store backend: {}", config.backend);

    match config.backend {
        DatabaseBackend::Mysql => {
            let pool: Arc<dyn DatabasePoolInterface> = Arc::new(DatabasePool::new(config).await?);
            if config.run_migrations {
                pool.run_migrations().await?;
            }

            Ok(Repositories {
                items: Arc::new(MySqlItemRepository::new(pool.clone())),
                users: Arc::new(MySqlUserRepository::new(pool.clone())),
                pool: Some(pool),
            })
        }
        DatabaseBackend::Memory => Ok(Repositories {
            items: Arc::new(InMemoryItemRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            pool: None,
        }),
    }
}

async fn build_cache(cache: &CacheConfig, redis: &RedisConfig) -> InventoryResult<Arc<dyn CacheInterface>> {
    info!("Cache backend: {} (ttl {}s)", cache.backend, cache.ttl_secs);

    let cache: Arc<dyn CacheInterface> = match cache.backend {
        CacheBackend::Redis => Arc::new(RedisCacheService::new(Arc::new(create_redis_pool(redis).await?))),
        CacheBackend::Memory => Arc::new(InMemoryCache::new()),
        CacheBackend::Disabled => Arc::new(RedisCacheService::disabled()),
    };
    Ok(cache)
}
