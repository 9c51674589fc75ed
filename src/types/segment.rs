//! Article segments.

use serde::{Deserialize, Serialize};

/// A contiguous, sentence-aligned span of the source article.
///
/// Segments are produced fresh per extraction call, submitted to the
/// model one at a time, and discarded after the merge. The segmenter
/// guarantees no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Sentence-concatenated span text
    pub text: String,
}

impl Segment {
    /// Create a segment from span text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of whitespace-separated words in the span.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Append more span text, separated by a single space.
    pub fn absorb(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }
}
