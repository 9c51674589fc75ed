//! Typed errors for the vocabulary extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction operations.
///
/// Data-related failures (malformed model output, dropped items) never
/// surface as `ExtractError` — the validator degrades them to empty
/// results. These variants cover the transport and setup layer.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Language model unavailable or returned an unusable response
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error (missing credential, bad setting)
    ///
    /// Fatal at startup: no external call may be issued after this.
    #[error("config error: {0}")]
    Config(String),

    /// CSV shaping of results failed
    #[error("export error: {0}")]
    Export(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A whole model response failed validation.
///
/// These are inspectable outcomes, not faults: the public validator
/// logs them and degrades to an empty item list.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Response body was not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Top-level value was not a JSON object
    #[error("response is not a JSON object")]
    NotAnObject,

    /// Object is missing the `vocabulary` array
    #[error("response has no `vocabulary` array")]
    MissingVocabulary,
}

/// A single vocabulary item failed validation and was dropped.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Item is not a JSON object
    #[error("item is not a JSON object")]
    NotAnObject,

    /// Item is missing required fields
    #[error("item missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A required field is present but empty or the wrong type
    #[error("field `{field}` has an invalid value")]
    InvalidField { field: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
