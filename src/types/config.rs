//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Injected configuration for the extraction pipeline.
///
/// Everything the core would otherwise hardcode lives here: request
/// shape for the model call, segmentation bounds, and cache capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Model identifier sent with each completion request.
    ///
    /// Default: `gpt-3.5-turbo`.
    pub model: String,

    /// Sampling temperature for completion requests.
    ///
    /// Low by default (0.3) to keep the output schema-stable.
    pub temperature: f32,

    /// Maximum output tokens per completion request. Default: 1500.
    pub max_tokens: u32,

    /// Maximum number of distinct (segment, difficulty) cache entries.
    ///
    /// Least-recently-used entries are evicted past this. Default: 128.
    pub cache_capacity: usize,

    /// Upper word-count bound when accumulating sentences into a
    /// segment. Default: 300.
    pub target_words: usize,

    /// Lower word-count bound; undersized segments are merged into
    /// neighbors. Default: 80.
    pub min_words: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            max_tokens: 1500,
            cache_capacity: 128,
            target_words: 300,
            min_words: 80,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
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

    /// Set the cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the segmentation word-count bounds.
    pub fn with_segment_bounds(mut self, target_words: usize, min_words: usize) -> Self {
        self.target_words = target_words;
        self.min_words = min_words;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 1500);
        assert!(config.min_words < config.target_words);
    }

    #[test]
    fn test_builder() {
        let config = ExtractorConfig::new()
            .with_model("gpt-4o-mini")
            .with_segment_bounds(120, 40)
            .with_cache_capacity(8);

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.target_words, 120);
        assert_eq!(config.min_words, 40);
        assert_eq!(config.cache_capacity, 8);
    }
}
