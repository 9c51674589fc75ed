//! Response validation and normalization.
//!
//! The model's JSON is heterogeneous in practice: missing optional
//! fields, part-of-speech tags spelled a dozen ways, a bare string
//! where a list belongs. Everything funnels through here into the
//! canonical [`VocabularyItem`] shape.
//!
//! Failures are values, not faults: [`parse_response`] and
//! [`normalize_item`] return inspectable errors, and the public
//! [`validate`] wrapper logs them and degrades to an empty list.
//! Partial success is normal — a bad item is dropped, the rest survive.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ItemError, ValidationError};
use crate::types::vocabulary::{ItemKind, PartOfSpeech, VocabularyItem};

/// Maximum length of an English definition, ellipsis included.
pub const MAX_DEFINITION_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

const REQUIRED_FIELDS: [&str; 3] = ["word", "pos", "definition"];

/// Validate a raw model response into normalized vocabulary items.
///
/// Never raises: malformed JSON, a missing `vocabulary` array, or
/// per-item schema violations all degrade to fewer (possibly zero)
/// items plus a logged diagnostic. Item order matches the response
/// array order.
pub fn validate(raw: &str) -> Vec<VocabularyItem> {
    match parse_response(raw) {
        Ok(items) => {
            if items.is_empty() {
                warn!("validated response contains no usable vocabulary items");
            }
            items
        }
        Err(error) => {
            warn!(error = %error, "discarding model response");
            vec![]
        }
    }
}

/// Parse a raw response, dropping malformed items along the way.
///
/// Returns an error only for response-level problems (not JSON, not an
/// object, no `vocabulary` array). Item-level problems are logged and
/// skipped.
pub fn parse_response(raw: &str) -> Result<Vec<VocabularyItem>, ValidationError> {
    let data: Value = serde_json::from_str(raw)?;
    let object = data.as_object().ok_or(ValidationError::NotAnObject)?;
    let vocabulary = object
        .get("vocabulary")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingVocabulary)?;

    let mut items = Vec::with_capacity(vocabulary.len());
    for (index, entry) in vocabulary.iter().enumerate() {
        match normalize_item(entry) {
            Ok(item) => items.push(item),
            Err(error) => warn!(index, error = %error, "dropping vocabulary item"),
        }
    }

    debug!(
        received = vocabulary.len(),
        kept = items.len(),
        "validated vocabulary response"
    );
    Ok(items)
}

/// Normalize one response entry into a [`VocabularyItem`].
///
/// Requires `word`, `pos`, and `definition` keys; fills defaults for
/// the rest. The part-of-speech tag goes through the lookup table
/// (unknown tags become nouns), a string-valued `common-usage` is
/// coerced to a one-element list, `type` falls back to `word`, and the
/// definition is truncated to [`MAX_DEFINITION_CHARS`].
pub fn normalize_item(entry: &Value) -> Result<VocabularyItem, ItemError> {
    let object = entry.as_object().ok_or(ItemError::NotAnObject)?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !object.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ItemError::MissingFields { fields: missing });
    }

    let word = object
        .get("word")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| ItemError::InvalidField {
            field: "word".to_string(),
        })?;

    let definition = object
        .get("definition")
        .and_then(Value::as_str)
        .ok_or_else(|| ItemError::InvalidField {
            field: "definition".to_string(),
        })?;

    // A present but non-string tag is treated like any unknown tag.
    let pos = object
        .get("pos")
        .and_then(Value::as_str)
        .map(PartOfSpeech::parse)
        .unwrap_or(PartOfSpeech::Noun);

    let definition_native = object
        .get("definition-ch")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let usage_examples = match object.get("common-usage") {
        Some(Value::String(usage)) => vec![usage.clone()],
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => vec![],
    };

    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .map(ItemKind::parse)
        .unwrap_or_default();

    Ok(VocabularyItem {
        word: word.to_string(),
        pos,
        definition: truncate_definition(definition),
        definition_native,
        usage_examples,
        kind,
        segment_index: None,
    })
}

/// Cap a definition at [`MAX_DEFINITION_CHARS`] characters, replacing
/// the overflow with an ellipsis marker.
fn truncate_definition(definition: &str) -> String {
    if definition.chars().count() <= MAX_DEFINITION_CHARS {
        return definition.to_string();
    }

    let kept: String = definition
        .chars()
        .take(MAX_DEFINITION_CHARS - ELLIPSIS.len())
        .collect();
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_json_yields_empty() {
        assert!(validate("not json at all").is_empty());
        assert!(validate("{\"vocabulary\": [").is_empty());
    }

    #[test]
    fn test_missing_vocabulary_key_yields_empty() {
        assert!(validate(r#"{"words": []}"#).is_empty());
        assert!(matches!(
            parse_response(r#"{"words": []}"#),
            Err(ValidationError::MissingVocabulary)
        ));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        assert!(matches!(
            parse_response(r#"[{"word": "cat"}]"#),
            Err(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn test_item_missing_required_field_is_dropped() {
        let raw = json!({
            "vocabulary": [
                {"word": "aroma", "pos": ".n", "definition": "a pleasant smell"},
                {"word": "missing-definition", "pos": ".n"},
                {"word": "cobblestone", "pos": ".n", "definition": "a rounded paving stone"}
            ]
        })
        .to_string();

        let items = validate(&raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].word, "aroma");
        assert_eq!(items[1].word, "cobblestone");
    }

    #[test]
    fn test_missing_fields_are_named() {
        let entry = json!({"word": "aroma"});
        let err = normalize_item(&entry).unwrap_err();
        match err {
            ItemError::MissingFields { fields } => {
                assert_eq!(fields, vec!["pos".to_string(), "definition".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pos_is_normalized() {
        for tag in ["noun", "N", "n", ".n"] {
            let entry = json!({"word": "cat", "pos": tag, "definition": "a small animal"});
            let item = normalize_item(&entry).unwrap();
            assert_eq!(item.pos, PartOfSpeech::Noun, "tag {tag:?}");
        }

        let entry = json!({"word": "cat", "pos": "xyz", "definition": "a small animal"});
        assert_eq!(normalize_item(&entry).unwrap().pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_defaults_are_filled() {
        let entry = json!({"word": "aroma", "pos": ".n", "definition": "a pleasant smell"});
        let item = normalize_item(&entry).unwrap();

        assert_eq!(item.definition_native, "");
        assert!(item.usage_examples.is_empty());
        assert_eq!(item.kind, ItemKind::Word);
        assert_eq!(item.segment_index, None);
    }

    #[test]
    fn test_usage_string_is_coerced_to_list() {
        let entry = json!({
            "word": "solo",
            "pos": ".adj",
            "definition": "done by one person",
            "common-usage": "solo phrase"
        });

        let item = normalize_item(&entry).unwrap();
        assert_eq!(item.usage_examples, vec!["solo phrase".to_string()]);
    }

    #[test]
    fn test_usage_other_types_become_empty() {
        let entry = json!({
            "word": "solo",
            "pos": ".adj",
            "definition": "done by one person",
            "common-usage": 42
        });

        let item = normalize_item(&entry).unwrap();
        assert!(item.usage_examples.is_empty());
    }

    #[test]
    fn test_invalid_kind_resets_to_word() {
        let entry = json!({
            "word": "take off",
            "pos": ".v",
            "definition": "to leave the ground",
            "type": "collocation"
        });

        assert_eq!(normalize_item(&entry).unwrap().kind, ItemKind::Word);
    }

    #[test]
    fn test_long_definition_is_truncated_with_ellipsis() {
        let long_definition = "x".repeat(150);
        let entry = json!({"word": "cat", "pos": ".n", "definition": long_definition});

        let item = normalize_item(&entry).unwrap();
        assert_eq!(item.definition.chars().count(), MAX_DEFINITION_CHARS);
        assert_eq!(&item.definition[..97], &"x".repeat(97));
        assert!(item.definition.ends_with("..."));
    }

    #[test]
    fn test_exact_limit_definition_is_untouched() {
        let definition = "y".repeat(MAX_DEFINITION_CHARS);
        let entry = json!({"word": "cat", "pos": ".n", "definition": definition});

        let item = normalize_item(&entry).unwrap();
        assert_eq!(item.definition, "y".repeat(MAX_DEFINITION_CHARS));
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let entry = json!({"word": "  ", "pos": ".n", "definition": "blank"});
        assert!(matches!(
            normalize_item(&entry),
            Err(ItemError::InvalidField { field }) if field == "word"
        ));
    }

    #[test]
    fn test_item_order_matches_response_order() {
        let raw = json!({
            "vocabulary": [
                {"word": "first", "pos": ".n", "definition": "number one"},
                {"word": "second", "pos": ".n", "definition": "number two"},
                {"word": "third", "pos": ".n", "definition": "number three"}
            ]
        })
        .to_string();

        let words: Vec<String> = validate(&raw).into_iter().map(|i| i.word).collect();
        assert_eq!(words, vec!["first", "second", "third"]);
    }
}
