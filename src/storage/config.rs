//! Storage Configuration
//!
//! Selects the backend and bounds the SQL connection pool.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `database_url`
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Which store to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Process-local map, lost on exit
    Memory,
    /// SQLite table accessed through a connection pool
    #[default]
    Sqlite,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use (default: "sqlite")
    #[serde(default)]
    pub backend: StorageBackendKind,

    /// SQLite connection string (default: "sqlite://recordkeeper.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled connections (default: 10)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquisition timeout in milliseconds (default: 5000)
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,
}

fn default_database_url() -> String {
    "sqlite://recordkeeper.db".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_ms() -> u64 {
    5000
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_ms: default_acquire_timeout_ms(),
        }
    }
}

impl StorageConfig {
    /// In-memory configuration
    pub fn memory() -> Self {
        Self {
            backend: StorageBackendKind::Memory,
            ..Default::default()
        }
    }

    /// SQLite configuration for the given connection string
    pub fn sqlite(database_url: impl Into<String>) -> Self {
        Self {
            backend: StorageBackendKind::Sqlite,
            database_url: database_url.into(),
            ..Default::default()
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }

    /// Replace `database_url` with a non-empty override
    pub fn apply_database_url(&mut self, database_url: Option<String>) {
        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            self.database_url = url;
        }
    }

    /// Check pool bounds and connection string
    pub fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("storage.max_connections must be > 0".to_string());
        }
        if self.acquire_timeout_ms == 0 {
            return Err("storage.acquire_timeout_ms must be > 0".to_string());
        }
        if self.backend == StorageBackendKind::Sqlite && self.database_url.trim().is_empty() {
            return Err("storage.database_url is required for the sqlite backend".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackendKind::Sqlite);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StorageConfig = serde_json::from_str(r#"{"backend": "memory"}"#).unwrap();
        assert_eq!(config.backend, StorageBackendKind::Memory);
        assert_eq!(config.database_url, "sqlite://recordkeeper.db");
    }

    #[test]
    fn test_validate_rejects_zero_bounds() {
        let mut config = StorageConfig::default();
        config.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = StorageConfig::default();
        config.acquire_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_url_only_matters_for_sqlite() {
        let mut config = StorageConfig::sqlite("  ");
        assert!(config.validate().is_err());

        config.backend = StorageBackendKind::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_url_override() {
        let mut config = StorageConfig::default();
        config.apply_database_url(Some(String::new()));
        assert_eq!(config.database_url, "sqlite://recordkeeper.db");

        config.apply_database_url(Some("sqlite:///tmp/other.db".to_string()));
        assert_eq!(config.database_url, "sqlite:///tmp/other.db");
    }
}
