//! OpenAI-compatible implementation of the [`LanguageModel`] trait.
//!
//! Works against any chat-completions endpoint that honors
//! `response_format: json_object` (OpenAI itself, or a compatible
//! proxy configured through `BASE_URL`).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::security::ProviderCredentials;
use crate::traits::model::{CompletionRequest, LanguageModel};

/// Chat-completions client for OpenAI-compatible providers.
pub struct OpenAIModel {
    client: Client,
    credentials: ProviderCredentials,
}

impl OpenAIModel {
    /// Create a client from explicit credentials.
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
        }
    }

    /// Create a client from the environment.
    ///
    /// Fails fast with a config error when `OPENAI_API_KEY` is unset,
    /// so no extraction call can be attempted without credentials.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ProviderCredentials::from_env()?))
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.credentials.model = model.into();
        self
    }

    /// The model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }
}

#[async_trait]
impl LanguageModel for OpenAIModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.credentials.model.clone()),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.clone(),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.credentials.base_url.trim_end_matches('/')
            ))
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.api_key.expose()),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractError::Model(
                format!("provider returned {status}: {error_text}").into(),
            ));
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ExtractError::Model("response has no message content".into()))
    }
}

// Wire types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_model() {
        let model = OpenAIModel::new(ProviderCredentials::new("sk-test", "gpt-3.5-turbo"))
            .with_model("gpt-4o-mini");
        assert_eq!(model.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_request_wire_shape() {
        let body = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "instruction".to_string(),
            }],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            temperature: 0.3,
            max_tokens: 1500,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 1500);
    }

    #[test]
    fn test_missing_choices_deserializes_to_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_null_content_deserializes_to_none() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
