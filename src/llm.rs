use anyhow::anyhow;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Chat-completion provider. Everything that comes back is untrusted text;
/// callers validate shape and fall back to offline defaults on any error.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> anyhow::Result<String>;
}

pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> anyhow::Result<String> {
        if self.api_key.is_empty() {
            return Err(anyhow!("no API key configured"));
        }

        let response = self
            .client
            .post(GROQ_CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "temperature": temperature,
                "max_tokens": max_tokens,
                "messages": messages,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Groq request failed: status {status}, body {body}"));
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("error") {
            return Err(anyhow!("Groq returned error: {error}"));
        }

        body.get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow!("unexpected completion shape: {body}"))
    }
}

/// Canned provider for tests and offline state: replies with a fixed string,
/// or errors when none is set (which exercises every fallback path).
pub struct CannedLlm {
    pub reply: Option<String>,
}

impl CannedLlm {
    pub fn offline() -> Self {
        Self { reply: None }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }
}

#[async_trait]
impl LlmClient for CannedLlm {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _temperature: f32,
        _max_tokens: u32,
    ) -> anyhow::Result<String> {
        self.reply
            .clone()
            .ok_or_else(|| anyhow!("llm unavailable"))
    }
}

lazy_static! {
    // Models often wrap JSON in prose or code fences; take the outermost
    // object or array, whichever starts first.
    static ref JSON_BLOCK: Regex = Regex::new(r"(?s)\{.*\}|\[.*\]").unwrap();
}

/// Pull the JSON payload out of raw model text.
pub fn extract_json(raw: &str) -> Option<&str> {
    JSON_BLOCK.find(raw).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_strips_prose_around_object() {
        let raw = "Sure, here you go:\n{\"name\": \"Khichdi\", \"calories\": 350}\nEnjoy!";
        assert_eq!(
            extract_json(raw),
            Some("{\"name\": \"Khichdi\", \"calories\": 350}")
        );
    }

    #[test]
    fn extract_json_handles_arrays() {
        let raw = "```json\n[{\"title\": \"Dal\"}, {\"title\": \"Poha\"}]\n```";
        assert_eq!(
            extract_json(raw),
            Some("[{\"title\": \"Dal\"}, {\"title\": \"Poha\"}]")
        );
    }

    #[test]
    fn extract_json_none_without_payload() {
        assert_eq!(extract_json("no structured data here"), None);
    }

    #[tokio::test]
    async fn canned_llm_offline_errors() {
        let llm = CannedLlm::offline();
        let err = llm
            .complete(&[ChatMessage::user("hi")], 0.5, 100)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
