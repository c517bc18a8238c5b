//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables (a `.env` file is honoured) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::tdx::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_URL};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the TDX client id.
pub const CLIENT_ID_ENV: &str = "TDX_CLIENT_ID";

/// Environment variable holding the TDX client secret.
pub const CLIENT_SECRET_ENV: &str = "TDX_CLIENT_SECRET";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// TDX gateway endpoints and credentials.
    pub tdx: TdxConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// TDX gateway configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct TdxConfig {
    /// OAuth2 client id. Get one at https://tdx.transportdata.tw/
    pub client_id: Option<String>,

    /// OAuth2 client secret.
    pub client_secret: Option<String>,

    /// OAuth2 token endpoint.
    pub auth_url: String,

    /// Base URL of the basic data API.
    pub api_base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TdxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TdxConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("auth_url", &self.auth_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Default for TdxConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl TdxConfig {
    /// Return the configured client id and secret.
    ///
    /// Both are required; a missing or empty value is a configuration error.
    pub fn client_credentials(&self) -> Result<(&str, &str)> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", CLIENT_ID_ENV)))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", CLIENT_SECRET_ENV)))?;

        Ok((client_id, client_secret))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "THSRC-MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            tdx: TdxConfig::default(),
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
    /// TDX credentials come from `TDX_CLIENT_ID` / `TDX_CLIENT_SECRET`;
    /// server settings use the `MCP_` prefix, e.g. `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.tdx.client_id = std::env::var(CLIENT_ID_ENV).ok();
        config.tdx.client_secret = std::env::var(CLIENT_SECRET_ENV).ok();
        if config.tdx.client_credentials().is_ok() {
            info!("TDX credentials loaded from environment");
        } else {
            warn!(
                "{} and {} must both be set (register at https://tdx.transportdata.tw/)",
                CLIENT_ID_ENV, CLIENT_SECRET_ENV
            );
        }

        if let Ok(url) = std::env::var("MCP_TDX_AUTH_URL") {
            config.tdx.auth_url = url;
        }

        if let Ok(url) = std::env::var("MCP_TDX_API_BASE_URL") {
            config.tdx.api_base_url = url;
        }

        config
    }
}
