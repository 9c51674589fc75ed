//! Testing utilities including a mock language model.
//!
//! Useful for exercising the pipeline without real LLM calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractError, Result};
use crate::traits::model::{CompletionRequest, LanguageModel};

/// A mock language model for testing.
///
/// Returns deterministic, configurable responses and records every
/// call for assertions. By default it responds to everything with a
/// small schema-conformant vocabulary payload.
///
/// Clones share state, so a caller can hand one clone to the pipeline
/// and keep another for call assertions.
#[derive(Default, Clone)]
pub struct MockModel {
    /// (needle, response) pairs; first needle found in the user
    /// message wins
    responses: Arc<RwLock<Vec<(String, String)>>>,

    /// Response used when no needle matches
    default_response: Arc<RwLock<Option<String>>>,

    /// Needles whose requests should fail at the transport level
    fail_needles: Arc<RwLock<Vec<String>>>,

    /// Fail every request
    fail_all: Arc<RwLock<bool>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<CompletionCall>>>,
}

/// Record of one completion call made to the mock.
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub system: String,
    pub user: String,
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A two-item payload matching the expected response schema.
pub const SAMPLE_RESPONSE: &str = r#"{
    "vocabulary": [
        {
            "word": "aroma",
            "pos": ".n",
            "definition": "a pleasant smell",
            "common-usage": ["the aroma of fresh bread"],
            "type": "word"
        },
        {
            "word": "take into account",
            "pos": ".v",
            "definition": "to consider something when making a decision",
            "common-usage": ["take into account all factors"],
            "type": "phrase"
        }
    ]
}"#;

impl MockModel {
    /// Create a mock that answers everything with [`SAMPLE_RESPONSE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with `response` when the user message contains `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Override the fallback response.
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = Some(response.into());
        self
    }

    /// Fail requests whose user message contains `needle`.
    pub fn fail_when_contains(self, needle: impl Into<String>) -> Self {
        self.fail_needles.write().unwrap().push(needle.into());
        self
    }

    /// Fail every request.
    pub fn failing(self) -> Self {
        *self.fail_all.write().unwrap() = true;
        self
    }

    /// All calls made to this mock, in order.
    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.write().unwrap().push(CompletionCall {
            system: request.system.clone(),
            user: request.user.clone(),
            model: request.model.clone(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        });

        let should_fail = *self.fail_all.read().unwrap()
            || self
                .fail_needles
                .read()
                .unwrap()
                .iter()
                .any(|needle| request.user.contains(needle));
        if should_fail {
            return Err(ExtractError::Model("mock transport failure".into()));
        }

        if let Some((_, response)) = self
            .responses
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| request.user.contains(needle))
        {
            return Ok(response.clone());
        }

        Ok(self
            .default_response
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| SAMPLE_RESPONSE.to_string()))
    }
}
