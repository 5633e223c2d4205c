//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server against the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub run_migrations: bool,
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: None,
            run_migrations: true,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database = get("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = get("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.max_connections = max;
            }
            if let Some(min) = get("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database,
            run_migrations: get("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.run_migrations),
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.database.is_none());
        assert!(config.run_migrations);
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_port_and_database() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DATABASE_URL", "postgres://localhost/restful_blogapp"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("RUN_MIGRATIONS", "false"),
        ]);

        assert_eq!(config.port, 8081);
        assert!(!config.run_migrations);
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/restful_blogapp");
        assert_eq!(database.max_connections, 25);
        assert_eq!(database.min_connections, 1);
    }

    #[test]
    fn test_bad_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "http")]).port, 3000);
    }
}
