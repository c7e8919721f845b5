/// LLM client — the single point of entry for all Ollama calls in Parsume.
///
/// ARCHITECTURAL RULE: No other module may call the inference backend
/// directly. All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    /// Forces the backend to emit JSON-formatted output.
    format: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for a locally-hosted Ollama backend.
///
/// One attempt per call: a connectivity fault or malformed response is the
/// caller's error, with no retry and no repair pass.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single user turn to the chat endpoint and returns the
    /// assistant message text.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            format: "json",
        };

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH);
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if chat.message.content.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!(
            "LLM call succeeded: {} bytes of content",
            chat.message.content.len()
        );

        Ok(chat.message.content)
    }

    /// Convenience method that calls the model and deserializes the text
    /// response as JSON. The prompt must instruct the model to return valid
    /// JSON; fields absent from the output fall back to their serde defaults.
    pub async fn call_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let text = self.call(prompt).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gemma3:1b",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            stream: false,
            format: "json",
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gemma3:1b");
        assert_eq!(value["stream"], false);
        assert_eq!(value["format"], "json");
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_chat_response_parses_message_content() {
        let json = r#"{
            "model": "gemma3:1b",
            "created_at": "2026-08-07T10:00:00Z",
            "message": {"role": "assistant", "content": "{\"name\": \"John\"}"},
            "done": true
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.content, "{\"name\": \"John\"}");
    }
}
