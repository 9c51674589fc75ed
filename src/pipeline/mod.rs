//! Extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Text normalization (markup/URL stripping, whitespace collapse)
//! - Sentence-aligned segmentation bounded by word count
//! - Prompt construction per difficulty tier
//! - Per-segment model calls with LRU memoization
//! - Response validation into canonical vocabulary items
//! - Merge with segment provenance tagging

pub mod extractor;
pub mod normalize;
pub mod prompts;
pub mod segment;
pub mod validate;

pub use extractor::Extractor;
pub use normalize::clean_text;
pub use prompts::{build_system_prompt, format_article_prompt, EXTRACT_VOCABULARY_PROMPT};
pub use segment::{segment, split_sentences};
pub use validate::{normalize_item, parse_response, validate, MAX_DEFINITION_CHARS};
