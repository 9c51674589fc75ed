//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate so API keys never show up in logs, debug
//! output, or error messages.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{ExtractError, Result};

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this at the point of use (e.g. building an
    /// `Authorization` header).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Provider settings loaded before the pipeline runs.
///
/// A missing API key is fatal here, at startup, so no extraction call
/// can be attempted without credentials.
#[derive(Clone)]
pub struct ProviderCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,
}

impl ProviderCredentials {
    /// Create credentials with the default OpenAI endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: model.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Load from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `MODEL` and `BASE_URL` are
    /// optional overrides with the documented defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ExtractError::Config("OPENAI_API_KEY not set".to_string()))?;

        let model = std::env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Ok(Self {
            api_key: SecretString::new(api_key),
            model,
            base_url,
        })
    }

    /// Set the base URL (for proxies and compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
