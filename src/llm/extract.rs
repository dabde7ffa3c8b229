use log::{error, warn};
use serde_json::Value;

pub const CLARIFY_FALLBACK: &str = "I'm not sure how to respond to that. Could you clarify?";
pub const EMPTY_CONTENT_FALLBACK: &str =
    "I'm having trouble finding the right words. Please try again.";
pub const NO_REPLY_FALLBACK: &str =
    "I'm sorry, but I couldn't generate a response at the moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// A candidate or choice was present but carried no text field.
    MissingText,
    /// `candidates` was empty, or its content had no parts.
    EmptyContent,
    /// Neither `candidates` nor `choices` was found.
    NoReply,
    /// The body was not a JSON document at all.
    Malformed,
}

/// Outcome of pulling a reply out of an upstream body. Fallbacks are still
/// replies from the HTTP layer's point of view; they never surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Reply(String),
    Fallback { text: String, reason: FallbackReason },
}

impl Extraction {
    pub fn into_text(self) -> String {
        match self {
            Extraction::Reply(text) => text,
            Extraction::Fallback { text, .. } => text,
        }
    }

    fn fallback(text: impl Into<String>, reason: FallbackReason) -> Self {
        Extraction::Fallback {
            text: text.into(),
            reason,
        }
    }
}

/// Extracts the reply text from a raw upstream body, tolerating both the
/// Gemini (`candidates`) and OpenAI-compatible (`choices`) shapes.
pub fn extract_reply(body: &str) -> Extraction {
    let document: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            error!("Error extracting text: {}", e);
            return Extraction::fallback(
                format!("Something went wrong: {}", e),
                FallbackReason::Malformed,
            );
        }
    };
    extract_from_document(&document)
}

pub fn extract_from_document(document: &Value) -> Extraction {
    if let Some(candidates) = document.get("candidates").and_then(Value::as_array) {
        let parts = candidates
            .first()
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array);

        return match parts {
            Some(parts) if !parts.is_empty() => {
                match parts[0].get("text").and_then(Value::as_str) {
                    Some(text) => Extraction::Reply(text.to_string()),
                    None => Extraction::fallback(CLARIFY_FALLBACK, FallbackReason::MissingText),
                }
            }
            _ => {
                warn!("No parts found in the content (candidates).");
                Extraction::fallback(EMPTY_CONTENT_FALLBACK, FallbackReason::EmptyContent)
            }
        };
    }

    if let Some(first) = document
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        return match first
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
        {
            Some(text) => Extraction::Reply(text.to_string()),
            None => Extraction::fallback(CLARIFY_FALLBACK, FallbackReason::MissingText),
        };
    }

    warn!("No candidates or choices found in the response.");
    Extraction::fallback(NO_REPLY_FALLBACK, FallbackReason::NoReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_gemini_shape() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "Paris is lovely"}]}}]
        })
        .to_string();
        assert_eq!(
            extract_reply(&body),
            Extraction::Reply("Paris is lovely".to_string())
        );
    }

    #[test]
    fn empty_parts_yields_clarification_fallback() {
        let body = json!({"candidates": [{"content": {"parts": []}}]}).to_string();
        assert_eq!(
            extract_reply(&body),
            Extraction::Fallback {
                text: EMPTY_CONTENT_FALLBACK.to_string(),
                reason: FallbackReason::EmptyContent,
            }
        );
    }

    #[test]
    fn empty_candidates_yields_clarification_fallback() {
        let body = json!({"candidates": []}).to_string();
        assert_eq!(
            extract_reply(&body),
            Extraction::Fallback {
                text: EMPTY_CONTENT_FALLBACK.to_string(),
                reason: FallbackReason::EmptyContent,
            }
        );
    }

    #[test]
    fn extracts_openai_compatible_shape() {
        let body = json!({"choices": [{"message": {"content": "Hello"}}]}).to_string();
        assert_eq!(extract_reply(&body), Extraction::Reply("Hello".to_string()));
    }

    #[test]
    fn missing_text_field_asks_for_clarification() {
        let body = json!({"candidates": [{"content": {"parts": [{"inline_data": {}}]}}]})
            .to_string();
        assert_eq!(
            extract_reply(&body),
            Extraction::Fallback {
                text: CLARIFY_FALLBACK.to_string(),
                reason: FallbackReason::MissingText,
            }
        );
    }

    #[test]
    fn empty_document_yields_generic_fallback() {
        assert_eq!(
            extract_reply("{}"),
            Extraction::Fallback {
                text: NO_REPLY_FALLBACK.to_string(),
                reason: FallbackReason::NoReply,
            }
        );
    }

    #[test]
    fn non_json_body_is_downgraded_not_raised() {
        match extract_reply("<html>502 Bad Gateway</html>") {
            Extraction::Fallback { text, reason } => {
                assert!(text.starts_with("Something went wrong:"));
                assert_eq!(reason, FallbackReason::Malformed);
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }
}
