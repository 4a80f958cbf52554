//! Server startup utilities.

use inventory_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____                      __
   /  _/___ _   _____  ____  / /_____  _______  __
   / // __ \ | / / _ \/ __ \/ __/ __ \/ ___/ / / /
 _/ // / / / |/ /  __/ / / / /_/ /_/ / /  / /_/ /
/___/_/ /_/|___/\___/_/ /_/\__/\____/_/   \__, /
                                         /____/
    "#
    );
}

/// Summary lines logged once the configuration is loaded.
pub fn startup_summary(config: &AppConfig) -> Vec<String> {
    let addr = config.server.addr();
    vec![
        format!("Environment: {}", config.app.environment),
        format!("Store:       {}", config.database.backend),
        format!("Cache:       {} (ttl {}s)", config.cache.backend, config.cache.ttl_secs),
        format!("REST API:    http://{}", addr),
        format!("Health:      http://{}/health", addr),
        format!("API Docs:    http://{}/swagger-ui", addr),
    ]
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    for line in startup_summary(config) {
        info!("{}", line);
    }
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_config::{CacheBackend, DatabaseBackend};

    #[test]
    fn test_summary_for_default_config() {
        let summary = startup_summary(&AppConfig::default());

        assert_eq!(
            summary,
            vec![
                "Environment: development",
                "Store:       mysql",
                "Cache:       redis (ttl 900s)",
                "REST API:    http://0.0.0.0:8000",
                "Health:      http://0.0.0.0:8000/health",
                "API Docs:    http://0.0.0.0:8000/swagger-ui",
            ]
        );
    }

    #[test]
    fn test_summary_reflects_backends() {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.cache.backend = CacheBackend::Disabled;
        config.cache.ttl_secs = 60;

        let summary = startup_summary(&config);
        assert_eq!(summary[1], "Store:       memory");
        assert_eq!(summary[2], "Cache:       disabled (ttl 60s)");
    }
}
