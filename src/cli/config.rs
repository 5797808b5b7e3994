//! Configuration file
//!
//! ```json
//! {
//!   "server":  { "host": "0.0.0.0", "port": 5000, "cors_origins": [] },
//!   "storage": { "backend": "sqlite", "database_url": "sqlite://recordkeeper.db",
//!                "max_connections": 10, "acquire_timeout_ms": 5000 },
//!   "log_level": "info"
//! }
//! ```
//!
//! Every field is optional. `DATABASE_URL` overrides `storage.database_url`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;
use crate::storage::{StorageConfig, DATABASE_URL_ENV};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Lowest severity written by the logger (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            storage: StorageConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.storage
            .apply_database_url(std::env::var(DATABASE_URL_ENV).ok());
    }

    fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::config_error)?;
        self.storage.validate().map_err(CliError::config_error)?;
        self.log_severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }

    /// Write configuration as pretty JSON
    pub fn write(&self, path: &Path) -> CliResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
