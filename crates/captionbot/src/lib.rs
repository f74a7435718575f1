//! CaptionBot - session client for the CaptionBot image captioning service.
//!
//! The service holds a short conversation per client: a token from `/init`,
//! then caption requests that each hand back a new watermark to echo on the
//! next call. [`CaptionBot`] keeps that state and turns the service's
//! double-encoded JSON replies into plain caption strings.
//!
//! ```text
//! init → token ─┐
//!               ├→ POST /message (submit) → GET /message (result) → caption
//! upload → ref ─┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use captionbot::{CaptionBot, Config};
//!
//! fn main() -> captionbot::Result<()> {
//!     let mut bot = CaptionBot::connect(Config::default())?;
//!
//!     let caption = bot.caption_url("https://example.com/cat.jpg")?;
//!     println!("{caption}");
//!
//!     let caption = bot.caption_upload("./sample.jpg")?;
//!     println!("{caption}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::{CaptionBot, CaptionService, SessionState, SessionStatus};
pub use config::Config;
pub use error::{CaptionError, ConfigError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
