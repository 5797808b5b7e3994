//! Listener and CORS settings for the record API.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Where the API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Exact origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured origins as header values, or `None` when any origin is allowed
    pub fn allowed_origins(&self) -> Result<Option<Vec<HeaderValue>>, String> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| format!("server.cors_origins: invalid origin '{}'", origin))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        self.allowed_origins()?;
        Ok(())
    }
}
