//! LLM-Driven Vocabulary Extraction Library
//!
//! Extracts notable vocabulary (words and phrases) from an English
//! article by delegating semantic judgment to a language model. The
//! library's own job is orchestration, validation, and shaping:
//!
//! - Split a long article into bounded, sentence-respecting segments
//! - Invoke the model independently per segment
//! - Normalize heterogeneous JSON into a canonical item schema
//! - Merge results while preserving segment provenance
//!
//! # Design Philosophy
//!
//! The model does the linguistic judgment; the pipeline never
//! interprets words itself. Every data-related failure (malformed
//! response, dropped item, failed segment) degrades to fewer items
//! with a logged diagnostic — callers always get a list back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vocab_extraction::{Difficulty, Extractor, ExtractorConfig, OpenAIModel};
//!
//! let model = OpenAIModel::from_env()?;
//! let extractor = Extractor::with_config(model, ExtractorConfig::default());
//!
//! let items = extractor.extract_by_paragraphs(&article, Difficulty::Advanced).await;
//! let csv = vocab_extraction::export::to_csv(&items)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`LanguageModel`] seam the pipeline calls through
//! - [`types`] - Vocabulary item, segment, and configuration types
//! - [`pipeline`] - Normalizer, segmenter, prompts, validator, extractor
//! - [`cache`] - Bounded LRU memoization of extraction calls
//! - [`model`] - OpenAI-compatible provider client
//! - [`export`] - CSV shaping for the spreadsheet collaborator
//! - [`security`] - Credential handling
//! - [`testing`] - Mock model for tests

pub mod cache;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractError, ItemError, Result, ValidationError};
pub use traits::model::{CompletionRequest, LanguageModel};
pub use types::{
    config::ExtractorConfig,
    segment::Segment,
    vocabulary::{Difficulty, ItemKind, PartOfSpeech, VocabularyItem},
};

// Re-export pipeline components
pub use pipeline::{
    build_system_prompt, clean_text, format_article_prompt, normalize_item, parse_response,
    segment, split_sentences, validate, Extractor, MAX_DEFINITION_CHARS,
};

// Re-export the cache
pub use cache::{CacheKey, ExtractionCache};

// Re-export the provider client
pub use model::OpenAIModel;

// Re-export credential handling
pub use security::{ProviderCredentials, SecretString};

// Re-export testing utilities
pub use testing::MockModel;
