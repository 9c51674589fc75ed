//! The Extractor - main entry point for the pipeline.
//!
//! Drives segmentation, per-segment cached model calls, validation,
//! and the final merge. Data-related failures never escape: every
//! public operation returns a (possibly empty) item list.

use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ExtractionCache};
use crate::pipeline::normalize::clean_text;
use crate::pipeline::prompts::{build_system_prompt, format_article_prompt};
use crate::pipeline::segment::segment;
use crate::pipeline::validate::validate;
use crate::traits::model::{CompletionRequest, LanguageModel};
use crate::types::config::ExtractorConfig;
use crate::types::vocabulary::{Difficulty, VocabularyItem};

/// Orchestrates vocabulary extraction over a language model.
///
/// # Example
///
/// ```rust,ignore
/// use vocab_extraction::{Extractor, Difficulty};
/// use vocab_extraction::model::OpenAIModel;
///
/// let model = OpenAIModel::from_env()?;
/// let extractor = Extractor::new(model);
///
/// let items = extractor.extract_by_paragraphs(&article, Difficulty::Medium).await;
/// ```
pub struct Extractor<M: LanguageModel> {
    model: M,
    config: ExtractorConfig,
    cache: Mutex<ExtractionCache>,
}

impl<M: LanguageModel> Extractor<M> {
    /// Create an extractor with the default configuration.
    pub fn new(model: M) -> Self {
        Self::with_config(model, ExtractorConfig::default())
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(model: M, config: ExtractorConfig) -> Self {
        Self {
            cache: Mutex::new(ExtractionCache::new(config.cache_capacity)),
            model,
            config,
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract vocabulary from one span of text.
    ///
    /// Memoized on (normalized content, difficulty): a repeat call
    /// with the same pair is served from the cache without touching
    /// the model. Transport failures and unusable responses degrade
    /// to an empty list with a logged diagnostic.
    pub async fn extract(&self, text: &str, difficulty: Difficulty) -> Vec<VocabularyItem> {
        let content = clean_text(text);
        if content.is_empty() {
            return vec![];
        }

        let key = CacheKey::new(&content, difficulty);
        if let Some(items) = self.cache.lock().unwrap().get(&key) {
            debug!(difficulty = difficulty.as_str(), "serving extraction from cache");
            return items;
        }

        let request = CompletionRequest::new(
            build_system_prompt(difficulty),
            format_article_prompt(&content),
        )
        .with_model(self.config.model.clone())
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens);

        let items = match self.model.complete(&request).await {
            Ok(response) => validate(&response),
            Err(error) => {
                // Not cached, so a later retry reaches the model again.
                warn!(error = %error, "model call failed; returning no items");
                return vec![];
            }
        };

        self.cache.lock().unwrap().insert(key, items.clone());
        items
    }

    /// Extract vocabulary from a whole article, segment by segment.
    ///
    /// Segments are processed in order; each item is tagged with the
    /// 1-based index of the segment that produced it, and results are
    /// concatenated preserving (segment, within-segment) order. A
    /// failed segment contributes nothing but never aborts the rest.
    /// An empty article returns an empty list without any model call.
    pub async fn extract_by_paragraphs(
        &self,
        article: &str,
        difficulty: Difficulty,
    ) -> Vec<VocabularyItem> {
        let segments = segment(article, self.config.target_words, self.config.min_words);
        if segments.is_empty() {
            debug!("article normalized to nothing; skipping extraction");
            return vec![];
        }

        info!(
            segments = segments.len(),
            difficulty = difficulty.as_str(),
            "extracting vocabulary"
        );

        let mut merged = Vec::new();
        for (index, seg) in segments.iter().enumerate() {
            let mut items = self.extract(&seg.text, difficulty).await;
            for item in &mut items {
                item.segment_index = Some(index + 1);
            }
            merged.extend(items);
        }

        info!(items = merged.len(), "extraction complete");
        merged
    }
}
