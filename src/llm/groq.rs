//! Groq chat-completion client
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol, so any
//! compatible endpoint can be configured through `llm.base_url`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use super::{ChatPrompt, CompletionProvider, GenerationError};
use crate::config::{API_KEY_ENV, LlmConfig};
use crate::{Result, YatraError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completion client for Groq's OpenAI-compatible API
pub struct GroqClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GroqClient {
    /// Create a new client. Fails if no API key is configured.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| YatraError::config(format!("{API_KEY_ENV} is not set")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("Yatra/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| YatraError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    #[instrument(name = "chat_completion", skip_all, fields(model = %self.model))]
    async fn complete(&self, prompt: &ChatPrompt) -> std::result::Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Chat completion request URL: {}", self.endpoint);
        let start_time = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("response contained no completion".to_string())
            })?;

        info!(
            "Chat completion finished in {:?} ({} chars)",
            start_time.elapsed(),
            text.len()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: key.map(str::to_string),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = GroqClient::new(&config_with_key(None));
        assert!(matches!(result, Err(YatraError::Config { .. })));

        let result = GroqClient::new(&config_with_key(Some("")));
        assert!(matches!(result, Err(YatraError::Config { .. })));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let mut config = config_with_key(Some("gsk_test"));
        config.base_url = "http://127.0.0.1:9999/v1/".to_string();
        let client = GroqClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9999/v1/chat/completions");
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "llama-3.1-8b-instant",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 1100,
            temperature: 0.3,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
        assert_eq!(value["max_tokens"], 1100);
    }
}
