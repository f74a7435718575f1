//! Configuration for the CaptionBot client.
//!
//! Every section implements `Default`, so an empty TOML document (or no file
//! at all) yields a client pointed at the public service.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote service settings
    pub service: ServiceConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Build a config that targets `base_url` with all other settings default.
    ///
    /// Handy for pointing the client at a local mock service.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            service: ServiceConfig {
                base_url: base_url.into(),
                ..ServiceConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
