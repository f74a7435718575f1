//! Sub-configuration structs with defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public CaptionBot API root.
pub const DEFAULT_BASE_URL: &str = "https://www.captionbot.ai/api";

/// Remote service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// API root; every endpoint is a path below it
    pub base_url: String,

    /// Optional per-request transport timeout in milliseconds.
    /// Unset means the transport waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            user_agent: format!("captionbot-rs/{}", crate::VERSION),
        }
    }
}

impl ServiceConfig {
    /// Join the base URL with an endpoint name, tolerating a trailing slash.
    pub fn endpoint(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }

    /// Transport timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
