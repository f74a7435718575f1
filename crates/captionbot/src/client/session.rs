//! Conversation state held by one client.

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No conversation token yet; caption calls are rejected
    Uninitialized,
    /// Token present; caption calls are allowed
    Ready,
}

/// Conversation token plus the watermark cursor the service hands back.
///
/// Mutated only after a response has been fully parsed, so a failed call
/// leaves it exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    conversation_token: String,
    water_mark: String,
}

impl SessionState {
    /// Opaque identifier issued by the service's init endpoint.
    pub fn conversation_token(&self) -> &str {
        &self.conversation_token
    }

    /// Cursor from the most recent successful caption, empty before the first.
    pub fn water_mark(&self) -> &str {
        &self.water_mark
    }

    pub fn status(&self) -> SessionStatus {
        if self.conversation_token.is_empty() {
            SessionStatus::Uninitialized
        } else {
            SessionStatus::Ready
        }
    }

    /// Start a new conversation. The old watermark belongs to the old
    /// conversation, so it is cleared.
    pub(crate) fn begin(&mut self, token: String) {
        self.conversation_token = token;
        self.water_mark.clear();
    }

    /// Replace, never merge.
    pub(crate) fn replace_water_mark(&mut self, water_mark: String) {
        self.water_mark = water_mark;
    }
}
