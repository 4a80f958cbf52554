//! Configuration loader with layered sources.

use crate::{AppConfig, DatabaseBackend, DEFAULT_JWT_SECRET};
use config::{Config, ConfigError, Environment, File};
use inventory_core::{InventoryError, InventoryResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "INVENTORY";

/// Loads the application configuration once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Untracked local overrides
    /// 4. Environment variables with `INVENTORY_` prefix and `__` separator
    ///
    /// The environment name comes from `INVENTORY_ENVIRONMENT` and defaults
    /// to `development`.
    pub fn new(config_dir: impl Into<PathBuf>) -> InventoryResult<Self> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT")).unwrap_or_else(|_| "development".to_string());
        Self::for_environment(config_dir, &environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn for_environment(config_dir: impl Into<PathBuf>, environment: &str) -> InventoryResult<Self> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir, environment)?;
        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> InventoryResult<Self> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    #[must_use]
    pub fn into_inner(self) -> AppConfig {
        self.config
    }

    /// Returns the directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn load_config(config_dir: &Path, environment: &str) -> InventoryResult<AppConfig> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_default("app.environment", environment)
            .map_err(config_error_to_inventory_error)?;

        for name in ["default", environment, "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins"),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error_to_inventory_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> InventoryResult<()> {
        if config.app.is_production() && config.security.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("Using default JWT secret in production! This is a security risk.");
        }

        if config.database.backend == DatabaseBackend::Mysql && config.database.url.is_empty() {
            return Err(InventoryError::Configuration("Database URL is required".to_string()));
        }

        if config.cache.backend.uses_redis() && config.redis.url.is_empty() {
            return Err(InventoryError::Configuration(
                "Redis URL is required when the cache backend is redis".to_string(),
            ));
        }

        if config.cache.ttl_secs == 0 {
            return Err(InventoryError::Configuration(
                "cache.ttl_secs must be greater than zero".to_string(),
            ));
        }

        if config.security.jwt_secret.is_empty() {
            return Err(InventoryError::Configuration("JWT secret is required".to_string()));
        }

        Ok(())
    }
}

fn config_error_to_inventory_error(err: ConfigError) -> InventoryError {
    InventoryError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheBackend;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::for_environment(dir.path().join("absent"), "test").unwrap();
        assert_eq!(loader.get().cache.ttl_secs, 900);
        assert_eq!(loader.get().app.environment, "test");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[server]\nport = 9000\n\n[cache]\nbackend = \"memory\"\nttl_secs = 120\n",
        );
        write(&dir, "staging.toml", "[server]\nport = 9100\n");

        let config = ConfigLoader::for_environment(dir.path(), "staging").unwrap().into_inner();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.cache.ttl_secs, 120);
    }

    #[test]
    fn test_local_file_wins_over_environment_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[database]\nbackend = \"memory\"\n");
        write(&dir, "development.toml", "[server]\nport = 9001\n");
        write(&dir, "local.toml", "[server]\nport = 9002\n");

        let config = ConfigLoader::for_environment(dir.path(), "development").unwrap().into_inner();
        assert_eq!(config.server.port, 9002);
        assert_eq!(config.database.backend, DatabaseBackend::Memory);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[cache]\nttl_secs = 0\n");

        let result = ConfigLoader::for_environment(dir.path(), "test");
        assert!(matches!(result, Err(InventoryError::Configuration(_))));
    }

    #[test]
    fn test_empty_database_url_rejected_for_mysql() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[database]\nbackend = \"mysql\"\nurl = \"\"\n");

        let result = ConfigLoader::for_environment(dir.path(), "test");
        assert!(matches!(result, Err(InventoryError::Configuration(_))));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[cache]\nbackend = \"memcached\"\n");

        assert!(ConfigLoader::for_environment(dir.path(), "test").is_err());
    }
}
