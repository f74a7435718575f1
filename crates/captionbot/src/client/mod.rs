//! Session client for the CaptionBot API.
//!
//! A [`CaptionBot`] owns one conversation: it fetches a conversation token
//! once, then captions images by URL or by uploading a local file. All calls
//! are blocking and run their HTTP round-trips one after another.

mod session;
pub(crate) mod upload;
pub mod wire;

pub use session::{SessionState, SessionStatus};
pub use upload::mime_type_for;
pub use wire::{CaptionRequest, CaptionResponse, CAPTION_INDEX};

use reqwest::header::CONTENT_TYPE;
use std::path::Path;

use crate::config::Config;
use crate::error::{CaptionError, Result};

/// Content type the message endpoint expects on task submission.
const TASK_CONTENT_TYPE: &str = "application/json; charset=utf8";

/// Operations one caption session supports.
///
/// Implemented by [`CaptionBot`]; code that only needs captions can depend on
/// this trait and swap in a fake.
pub trait CaptionService {
    /// Obtain a conversation token from the service.
    fn initialize(&mut self) -> Result<()>;

    /// Caption an image reachable at `image_url`.
    fn caption_url(&mut self, image_url: &str) -> Result<String>;

    /// Upload a local image and caption it.
    fn caption_upload(&mut self, path: &Path) -> Result<String>;
}

/// One conversation with the CaptionBot service.
///
/// Not meant to be shared between threads without external locking; every
/// call that touches the session takes `&mut self`.
pub struct CaptionBot {
    config: Config,
    client: reqwest::blocking::Client,
    state: SessionState,
}

impl CaptionBot {
    /// Create an uninitialized client from configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.service.user_agent.clone())
            .timeout(config.service.timeout())
            .build()
            .map_err(|e| CaptionError::transport("client setup", e))?;

        Ok(Self {
            config,
            client,
            state: SessionState::default(),
        })
    }

    /// Create a client against the public service with default settings.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Create a client and initialize its session in one step.
    pub fn connect(config: Config) -> Result<Self> {
        let mut bot = Self::new(config)?;
        bot.initialize()?;
        Ok(bot)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the conversation state.
    pub fn session(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }

    /// Fetch a conversation token from `/init`.
    ///
    /// On success any previous conversation is replaced and the watermark
    /// starts over empty. On failure the session is left untouched.
    pub fn initialize(&mut self) -> Result<()> {
        let url = self.config.service.endpoint("init");
        tracing::debug!("GET {url}");

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.text())
            .map_err(|e| CaptionError::transport("initialize", e))?;

        let token = wire::decode_json_string(&body, "conversation token")?;
        if token.is_empty() {
            return Err(CaptionError::MalformedResponse(
                "service returned an empty conversation token".to_string(),
            ));
        }

        self.state.begin(token);
        tracing::info!("CaptionBot session established");
        Ok(())
    }

    /// Caption the image at `image_url`.
    ///
    /// Submits the caption task with a POST, then fetches the result with a
    /// GET carrying the same fields as query parameters. The watermark is
    /// replaced only once the reply has been fully decoded.
    pub fn caption_url(&mut self, image_url: &str) -> Result<String> {
        if self.state.status() == SessionStatus::Uninitialized {
            return Err(CaptionError::NotInitialized);
        }

        let url = self.config.service.endpoint("message");
        let request = CaptionRequest {
            conversation_id: self.state.conversation_token(),
            user_message: image_url,
            water_mark: self.state.water_mark(),
        };

        self.submit_task(&url, &request)?;

        tracing::debug!("GET {url} for {image_url}");
        let body = self
            .client
            .get(&url)
            .query(&request)
            .send()
            .and_then(|resp| resp.text())
            .map_err(|e| CaptionError::transport("caption query", e))?;

        let response = CaptionResponse::parse(&body)?;
        let caption = response.caption()?.to_string();

        self.state.replace_water_mark(response.water_mark().to_string());
        tracing::debug!(water_mark = self.state.water_mark(), "Caption received");
        Ok(caption)
    }

    /// Upload the image at `path` and caption it.
    ///
    /// The reference returned by `/upload` is captioned through
    /// [`caption_url`](Self::caption_url), so its errors pass through as-is.
    /// An uninitialized client fails before the file is sent.
    pub fn caption_upload(&mut self, path: impl AsRef<Path>) -> Result<String> {
        if self.state.status() == SessionStatus::Uninitialized {
            return Err(CaptionError::NotInitialized);
        }

        let path = path.as_ref();
        let form = upload::build_form(path)?;

        let url = self.config.service.endpoint("upload");
        tracing::debug!("POST {url} with {}", path.display());

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| CaptionError::Upload {
                message: format!("request for {} failed", path.display()),
                status_code: None,
                source: Some(e),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CaptionError::Upload {
                message: format!("HTTP {status} for {}", path.display()),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        let body = resp.text().map_err(|e| CaptionError::Upload {
            message: format!("failed to read response body for {}", path.display()),
            status_code: Some(status.as_u16()),
            source: Some(e),
        })?;
        let reference = wire::decode_json_string(&body, "upload reference")?;
        tracing::debug!("Uploaded {} as {reference}", path.display());

        self.caption_url(&reference)
    }

    /// POST the caption task. Only the status matters; the body is dropped.
    fn submit_task(&self, url: &str, request: &CaptionRequest<'_>) -> Result<()> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| CaptionError::decode("caption request", e))?;

        tracing::debug!("POST {url} for {}", request.user_message);
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, TASK_CONTENT_TYPE)
            .body(payload)
            .send()
            .map_err(|e| CaptionError::transport("caption task submission", e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CaptionError::TaskSubmission {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl CaptionService for CaptionBot {
    fn initialize(&mut self) -> Result<()> {
        CaptionBot::initialize(self)
    }

    fn caption_url(&mut self, image_url: &str) -> Result<String> {
        CaptionBot::caption_url(self, image_url)
    }

    fn caption_upload(&mut self, path: &Path) -> Result<String> {
        CaptionBot::caption_upload(self, path)
    }
}
