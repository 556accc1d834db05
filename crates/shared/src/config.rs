//! Configuration management for the MAL shelf workspace.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with defaults matching the public list the service was built for.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream list settings
    #[serde(default)]
    pub mal: MalConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Gallery client settings
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port (overridden by the PORT environment variable)
    pub port: u16,

    /// Directory holding the built application shell
    pub static_dir: String,

    /// Image path substituted when an entry has no usable image
    pub placeholder_image: String,
}

/// Upstream list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalConfig {
    /// Tracking site base URL
    pub base_url: String,

    /// Account whose lists are served
    pub username: String,

    /// Query sent with every list request
    pub query: ListQueryConfig,

    /// Client-level request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent sent upstream
    pub user_agent: String,
}

/// `load.json` query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQueryConfig {
    pub offset: u32,

    /// Sort order (5 = most recently updated)
    pub order: u32,

    /// Status filter (7 = all statuses)
    pub status: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// Gallery client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Base URL of the list API the gallery reads from
    pub api_base_url: String,

    /// Timeout for each list API request in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            static_dir: "dist".to_string(),
            placeholder_image: "/placeholder.svg".to_string(),
        }
    }
}

impl Default for MalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://myanimelist.net".to_string(),
            username: "EsieEyen".to_string(),
            query: ListQueryConfig::default(),
            request_timeout_secs: 30,
            user_agent: "mal-shelf/0.1.0".to_string(),
        }
    }
}

impl Default for ListQueryConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            order: 5,
            status: 7,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            mal: MalConfig::default(),
            logging: LoggingConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    Defaults,
}

impl ConfigOrigin {
    /// Log the origin; call after logging is initialized
    pub fn log(self, path: &Path) {
        match self {
            ConfigOrigin::File => tracing::info!(
                path = %path.display(),
                "Configuration loaded successfully"
            ),
            ConfigOrigin::Defaults => tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            ),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration. Nothing is
    /// logged here since this runs before logging is initialized; callers log
    /// the returned [`ConfigOrigin`] once it is.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, ConfigOrigin)> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok((Self::default(), ConfigOrigin::Defaults));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok((config, ConfigOrigin::File))
    }

    /// Apply the `PORT` environment variable, as hosting platforms set it
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        Ok(())
    }

    /// Get the path for the static application directory
    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.server.static_dir)
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }

    /// Parse the configured default log level
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .default_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
