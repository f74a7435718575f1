//! Error types for the CaptionBot session client.
//!
//! Each variant maps to one failure mode of a session call so callers can
//! decide whether to abort, re-initialize, or retry on their own terms.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for CaptionBot operations.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network or connection failure talking to the service
    #[error("Transport error during {operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not the JSON shape the service is expected to return
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A caption call was attempted before `initialize()` succeeded
    #[error("CaptionBot session not initialized; call initialize() first")]
    NotInitialized,

    /// The caption task POST came back with a non-2xx status
    #[error("Caption task submission failed with HTTP {status}")]
    TaskSubmission { status: u16 },

    /// Response parsed but is missing data the client relies on
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The upload POST failed
    #[error("Upload failed: {message}")]
    Upload {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Local file to upload does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Local file exists but could not be read
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize configuration back to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl CaptionError {
    pub(crate) fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }
}

/// Convenience type alias for CaptionBot results.
pub type Result<T> = std::result::Result<T, CaptionError>;
