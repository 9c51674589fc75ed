//! Segmenter - split normalized text into bounded, sentence-aligned
//! segments.
//!
//! Sentences are never broken: a segment is a run of whole sentences
//! whose word count stays within the configured target, and a second
//! pass merges undersized segments so no model call is wasted on a
//! degenerate tail.

use regex::Regex;

use crate::pipeline::normalize::clean_text;
use crate::types::segment::Segment;

/// Split normalized text into sentences.
///
/// A sentence ends at terminal punctuation (`.`, `!`, `?`) followed by
/// whitespace. The punctuation stays with its sentence and the exact
/// sentence text is preserved.
pub fn split_sentences(text: &str) -> Vec<String> {
    let boundary = Regex::new(r"[.!?]+\s+").unwrap();

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary_match in boundary.find_iter(text) {
        let punctuation_len = boundary_match.as_str().trim_end().len();
        let end = boundary_match.start() + punctuation_len;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = boundary_match.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Split an article into sentence-aligned segments bounded by word count.
///
/// The input is normalized first. Sentences are accumulated greedily up
/// to `target_words`; a single sentence longer than the target still
/// forms its own segment. A merge pass then absorbs segments that fall
/// under `min_words` into their neighbors, including an undersized tail,
/// so only the whole article being shorter than `min_words` produces a
/// segment below the minimum. Empty input yields no segments.
pub fn segment(text: &str, target_words: usize, min_words: usize) -> Vec<Segment> {
    let normalized = clean_text(text);
    if normalized.is_empty() {
        return vec![];
    }

    let sentences = split_sentences(&normalized);

    // Greedy pass: fill each segment up to the target.
    let mut segments: Vec<Segment> = Vec::new();
    let mut current = Segment::new("");
    for sentence in &sentences {
        let sentence_words = sentence.split_whitespace().count();
        if current.text.is_empty() || current.word_count() + sentence_words <= target_words {
            current.absorb(sentence);
        } else {
            segments.push(current);
            current = Segment::new(sentence.clone());
        }
    }
    if !current.text.is_empty() {
        segments.push(current);
    }

    // Merge pass: keep absorbing the next segment while the buffer is
    // still under the minimum, flushing once it clears the threshold.
    let mut merged: Vec<Segment> = Vec::new();
    let mut buffer: Option<Segment> = None;
    for seg in segments {
        match buffer.take() {
            None => buffer = Some(seg),
            Some(mut buf) => {
                if buf.word_count() < min_words {
                    buf.absorb(&seg.text);
                    buffer = Some(buf);
                } else {
                    merged.push(buf);
                    buffer = Some(seg);
                }
            }
        }
    }
    if let Some(buf) = buffer {
        if buf.word_count() < min_words {
            // Undersized tail merges upward into the previous segment.
            match merged.last_mut() {
                Some(last) => last.absorb(&buf.text),
                None => merged.push(buf),
            }
        } else {
            merged.push(buf);
        }
    }

    merged
}
