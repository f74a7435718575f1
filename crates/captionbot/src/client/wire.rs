//! Request/response shapes for the CaptionBot HTTP API and the decoding
//! steps its double-encoded replies need.
//!
//! The service answers caption queries with a JSON *string* whose content is
//! itself a JSON object. Decoding therefore happens in two passes:
//! [`decode_json_string`] strips the outer layer, then
//! [`CaptionResponse::parse`] reads the inner object. Older clients of this
//! service trimmed quotes and unescaped `\"` / `\n` by hand; a real JSON
//! string decoder covers both, and turns `\n` into an actual newline.

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

/// Position of the caption in `botMessages`. Index 0 echoes the requested
/// image URL back; the caption follows it.
pub const CAPTION_INDEX: usize = 1;

/// Body of the caption task POST, and the query string of the follow-up GET.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest<'a> {
    pub conversation_id: &'a str,
    pub user_message: &'a str,
    pub water_mark: &'a str,
}

/// Inner object of a caption query reply.
///
/// Only `water_mark` and `bot_messages` are consumed. Field names are matched
/// in both the camelCase and PascalCase spellings the service has used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptionResponse {
    #[serde(alias = "ConversationId", alias = "conversationID", alias = "ConversationID")]
    pub conversation_id: Option<String>,
    #[serde(alias = "UserMessage")]
    pub user_message: Option<String>,
    #[serde(alias = "WaterMark")]
    pub water_mark: Option<String>,
    #[serde(alias = "Status")]
    pub status: Option<String>,
    #[serde(alias = "BotMessages")]
    pub bot_messages: Option<Vec<String>>,
}

impl CaptionResponse {
    /// Decode a raw caption query body: outer JSON string, then inner object.
    pub fn parse(body: &str) -> Result<Self> {
        let inner = decode_json_string(body, "caption response envelope")?;
        serde_json::from_str(&inner).map_err(|e| CaptionError::decode("caption response", e))
    }

    /// The caption text, i.e. the bot message after the echoed URL.
    pub fn caption(&self) -> Result<&str> {
        let messages = self.bot_messages.as_deref().unwrap_or_default();
        messages
            .get(CAPTION_INDEX)
            .map(String::as_str)
            .ok_or_else(|| {
                CaptionError::MalformedResponse(format!(
                    "expected at least {} bot messages, got {}",
                    CAPTION_INDEX + 1,
                    messages.len()
                ))
            })
    }

    /// Watermark to carry into the next request. A missing field counts as empty.
    pub fn water_mark(&self) -> &str {
        self.water_mark.as_deref().unwrap_or_default()
    }
}

/// Decode a body whose top-level JSON value is a string.
///
/// Used for the init token, the upload reference, and the outer layer of
/// caption replies. Surrounding whitespace is accepted.
pub fn decode_json_string(body: &str, context: &'static str) -> Result<String> {
    serde_json::from_str::<String>(body).map_err(|e| CaptionError::decode(context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Captured caption query body (as it arrives on the wire).
    const CAPTURED_REPLY: &str = r#""{\"ConversationId\":null,\"UserMessage\":null,\"WaterMark\":\"131376785893474870\",\"Status\":null,\"BotMessages\":[\"http://www.nhatqbui.com/assets/me.jpg\",\"I think it's a man wearing glasses and smiling at the camera.\"]}""#;

    #[test]
    fn test_decode_json_string_token() {
        let token = decode_json_string(r#""conv-123""#, "token").unwrap();
        assert_eq!(token, "conv-123");
    }

    #[test]
    fn test_decode_json_string_tolerates_trailing_newline() {
        let token = decode_json_string("\"conv-123\"\n", "token").unwrap();
        assert_eq!(token, "conv-123");
    }

    #[test]
    fn test_decode_json_string_rejects_unquoted_body() {
        let err = decode_json_string("conv-123", "token").unwrap_err();
        assert!(matches!(err, CaptionError::Decode { context: "token", .. }));
    }

    #[test]
    fn test_decode_json_string_rejects_object_body() {
        let err = decode_json_string(r#"{"token":"x"}"#, "token").unwrap_err();
        assert!(matches!(err, CaptionError::Decode { .. }));
    }

    #[test]
    fn test_parse_captured_pascal_case_reply() {
        let response = CaptionResponse::parse(CAPTURED_REPLY).unwrap();
        assert_eq!(response.water_mark(), "131376785893474870");
        assert_eq!(
            response.caption().unwrap(),
            "I think it's a man wearing glasses and smiling at the camera."
        );
        assert!(response.status.is_none());
    }

    #[test]
    fn test_parse_camel_case_reply() {
        let body = r#""{\"waterMark\":\"wm-1\",\"botMessages\":[\"http://x/img.jpg\",\"a cat on a chair\"]}""#;
        let response = CaptionResponse::parse(body).unwrap();
        assert_eq!(response.water_mark(), "wm-1");
        assert_eq!(response.caption().unwrap(), "a cat on a chair");
    }

    #[test]
    fn test_escaped_newline_becomes_real_newline() {
        let body = r#""{\"botMessages\":[\"u\",\"line one\\nline two\"]}""#;
        let response = CaptionResponse::parse(body).unwrap();
        assert_eq!(response.caption().unwrap(), "line one\nline two");
    }

    #[test]
    fn test_escaped_quotes_in_caption() {
        let body = r#""{\"botMessages\":[\"u\",\"a sign that says \\\"stop\\\"\"]}""#;
        let response = CaptionResponse::parse(body).unwrap();
        assert_eq!(response.caption().unwrap(), r#"a sign that says "stop""#);
    }

    #[test]
    fn test_single_encoded_object_is_rejected() {
        let body = r#"{"waterMark":"wm-1","botMessages":["u","c"]}"#;
        let err = CaptionResponse::parse(body).unwrap_err();
        assert!(matches!(
            err,
            CaptionError::Decode {
                context: "caption response envelope",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_inner_object() {
        let err = CaptionResponse::parse(r#""{not json""#).unwrap_err();
        assert!(matches!(
            err,
            CaptionError::Decode {
                context: "caption response",
                ..
            }
        ));
    }

    #[test]
    fn test_too_few_bot_messages() {
        for body in [
            r#""{\"botMessages\":[]}""#,
            r#""{\"botMessages\":[\"only-url\"]}""#,
            r#""{\"botMessages\":null}""#,
            r#""{}""#,
        ] {
            let response = CaptionResponse::parse(body).unwrap();
            let err = response.caption().unwrap_err();
            assert!(matches!(err, CaptionError::MalformedResponse(_)), "{body}");
        }
    }

    #[test]
    fn test_missing_water_mark_is_empty() {
        let response = CaptionResponse::parse(r#""{\"botMessages\":[\"u\",\"c\"]}""#).unwrap();
        assert_eq!(response.water_mark(), "");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CaptionRequest {
            conversation_id: "conv-1",
            user_message: "http://x/img.jpg",
            water_mark: "",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "conversationId": "conv-1",
                "userMessage": "http://x/img.jpg",
                "waterMark": ""
            })
        );
    }
}
