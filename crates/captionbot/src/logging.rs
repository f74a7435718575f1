//! Logging initialization.
//!
//! The client itself only emits `tracing` events. Applications that do not
//! install their own subscriber can use these helpers to get human-readable
//! or JSON output on stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Install a global subscriber at `level` unless `RUST_LOG` overrides it.
///
/// Returns `false` if a global subscriber was already set, in which case
/// nothing changes.
pub fn init(level: &str, json_format: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .try_init()
    };

    result.is_ok()
}

/// Initialize logging from the `[logging]` config section.
///
/// `verbose_override` forces debug level regardless of the configured level.
pub fn init_from_config(config: &Config, verbose_override: bool) -> bool {
    let level = if verbose_override {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init(level, config.logging.format == "json")
}
