//! HTTP Server Configuration
//!
//! Host, port, CORS origin, store location, validation rules and logging.
//! Sources, later wins: defaults, optional JSON file, environment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ClientRules, DEFAULT_NAME_MIN_LENGTH};
use crate::observability::LogFormat;
use crate::storage::StoreConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// The single browser origin allowed by CORS (default: "http://localhost:3000")
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Store location (default: "sqlite://clientfolio.db?mode=rwc")
    #[serde(default)]
    pub store: StoreConfig,

    /// Minimum client name length (default: 2)
    #[serde(default = "default_name_min_length")]
    pub client_name_min_length: usize,

    /// Log filter directive (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format (default: "default")
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_name_min_length() -> usize {
    DEFAULT_NAME_MIN_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            store: StoreConfig::default(),
            client_name_min_length: default_name_min_length(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults, then the file if given, then the process environment
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from an environment lookup.
    ///
    /// Recognised keys: `HOST`, `PORT`, `CORS_ORIGIN`, `DATABASE_URL`,
    /// `CLIENT_NAME_MIN_LENGTH`, `LOG_LEVEL`, `LOG_FORMAT`. Empty values are
    /// ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.host = host;
        }
        if let Some(port) = get("PORT") {
            self.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(origin) = get("CORS_ORIGIN") {
            self.cors_origin = origin;
        }
        if let Some(url) = get("DATABASE_URL") {
            self.store.url = url;
        }
        if let Some(min) = get("CLIENT_NAME_MIN_LENGTH") {
            self.client_name_min_length =
                min.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        key: "CLIENT_NAME_MIN_LENGTH",
                        value: min.clone(),
                        reason: e.to_string(),
                    }
                })?;
        }
        if let Some(level) = get("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.log_format = format.parse().map_err(|e: crate::observability::LoggingError| {
                ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    value: format.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Client validation rules derived from this config
    pub fn client_rules(&self) -> ClientRules {
        ClientRules {
            name_min_length: self.client_name_min_length,
        }
    }
}
