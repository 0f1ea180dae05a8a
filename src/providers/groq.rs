//! Groq chat completion client (OpenAI-compatible API)

use super::traits::ChatModel;
use crate::error::ModelError;
use crate::network::HttpClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client for Groq's OpenAI-compatible chat completions endpoint
///
/// Each pipeline stage constructs its own client; instances hold no
/// conversation state between calls.
pub struct GroqClient {
    client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(
        client: HttpClient,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature,
        };

        let response = self
            .client
            .post_json(&self.endpoint(), Some(&self.api_key), &request)
            .await
            .map_err(|e| ModelError::Unavailable(e.to_string()))?;

        if response.is_auth_error() {
            return Err(ModelError::Auth {
                status: response.status,
            });
        }
        if !response.is_success() {
            return Err(ModelError::Unavailable(format!(
                "HTTP {}",
                response.status
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| ModelError::Unavailable(format!("invalid response body: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        debug!("Model returned {} characters", content.len());

        Ok(content)
    }
}
