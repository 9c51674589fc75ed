//! Text normalization - strip markup and collapse whitespace.

use regex::Regex;

/// Clean raw article text before segmentation.
///
/// Removes HTML-like tags and URLs, collapses every whitespace run
/// (including newlines) to a single space, and trims the ends. Empty
/// input yields empty output; there are no error conditions.
pub fn clean_text(text: &str) -> String {
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    let url_pattern = Regex::new(r"(?i)\b(?:https?://|www\.)\S+").unwrap();
    let whitespace_pattern = Regex::new(r"\s+").unwrap();

    let without_tags = tag_pattern.replace_all(text, " ");
    let without_urls = url_pattern.replace_all(&without_tags, " ");
    whitespace_pattern
        .replace_all(&without_urls, " ")
        .trim()
        .to_string()
}
