/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Server configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `TEMPLATE_SERVER_*` environment variables.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const ENV_LISTEN_ADDRESS: &str = "TEMPLATE_SERVER_LISTEN_ADDRESS";
pub const ENV_LISTEN_PORT: &str = "TEMPLATE_SERVER_LISTEN_PORT";
pub const ENV_LOG_LEVEL: &str = "TEMPLATE_SERVER_LOG_LEVEL";

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: String,
    pub listen_port: u16,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0".to_string(),
            listen_port: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load defaults, the optional file and the process environment, then validate
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path).await?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {}", path.display());

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))?;

        info!("Loaded configuration from file: {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a key lookup, normally the process environment
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(listen_address) = lookup(ENV_LISTEN_ADDRESS) {
            self.listen_address = listen_address;
        }

        if let Some(listen_port) = lookup(ENV_LISTEN_PORT) {
            self.listen_port = listen_port
                .trim()
                .parse()
                .map_err(|e| ConfigError::Parse(format!("Invalid listen_port: {}", e)))?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.listen_address.trim().is_empty() {
            return Err(ConfigError::Validation("listen_address must not be empty".to_string()));
        }
        if self.listen_port == 0 {
            return Err(ConfigError::Validation("listen_port must not be 0".to_string()));
        }
        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.listen_address, self.listen_port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid listen address: {}", e)))
    }
}
