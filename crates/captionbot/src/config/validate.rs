//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.service.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::ValidationError(
                "service.base_url must not be empty".into(),
            ));
        }
        let url = reqwest::Url::parse(base).map_err(|e| {
            ConfigError::ValidationError(format!("service.base_url is not a valid URL: {e}"))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError(format!(
                "service.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.service.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationError(
                "service.timeout_ms must be > 0 when set".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}, got '{}'",
                LOG_FORMATS.join(", "),
                self.logging.format
            )));
        }
        Ok(())
    }
}
