//! Language model trait for completion calls.
//!
//! The pipeline treats the model as an opaque, fallible dependency:
//! it sends an instruction plus a segment and expects JSON text back.
//! Implementations wrap specific providers and own the transport
//! details (endpoints, auth, retry policy if any).

use async_trait::async_trait;

use crate::error::Result;

/// A single chat-completion request.
///
/// Implementations must direct the provider to return a bare JSON
/// object (e.g. OpenAI's `response_format: json_object`); the
/// validator downstream assumes JSON text, not prose.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction (role + task + schema example)
    pub system: String,

    /// User message carrying the segment under analysis
    pub user: String,

    /// Model identifier override; `None` leaves the choice to the
    /// provider implementation
    pub model: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum output tokens
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request with the pipeline's default sampling shape.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            model: None,
            temperature: 0.3,
            max_tokens: 1500,
        }
    }

    /// Request a specific model from the provider.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum output tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Completion endpoint abstraction.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one completion and return the raw response text.
    ///
    /// A missing response, missing choices, or empty message content
    /// is an error here; callers degrade it to an empty item list.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
