//! Configuration management for the gateway server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.
//! Configuration is read once at startup and immutable thereafter.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::transport::TransportConfig;

/// Default upstream the gateway forwards to.
pub const DEFAULT_BASE_URL: &str = "https://blkmarket.ar";

/// Main configuration structure for the gateway server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API configuration.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the wrapped upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every endpoint template is resolved against.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "blkmarket-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_UPSTREAM_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_UPSTREAM_BASE_URL") {
            info!("Upstream base URL overridden: {}", base_url);
            config.upstream.base_url = base_url;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
