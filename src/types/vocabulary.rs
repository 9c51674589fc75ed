//! Vocabulary domain types.
//!
//! The wire schema (field names like `definition-ch`, `common-usage`,
//! `type`) is what the language model is asked to produce and what the
//! export collaborator consumes, so serde names follow it exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Part-of-speech tags with their canonical short codes.
///
/// Model responses spell these many ways (`"noun"`, `"N"`, `".n"`);
/// [`PartOfSpeech::parse`] folds every known spelling onto one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Determiner,
    Numeral,
    Interjection,
}

impl PartOfSpeech {
    /// Canonical short code (`.n`, `.v`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Noun => ".n",
            Self::Verb => ".v",
            Self::Adjective => ".adj",
            Self::Adverb => ".adv",
            Self::Preposition => ".prep",
            Self::Conjunction => ".conj",
            Self::Pronoun => ".pron",
            Self::Determiner => ".det",
            Self::Numeral => ".num",
            Self::Interjection => ".interj",
        }
    }

    /// Normalize a raw tag onto a canonical variant.
    ///
    /// Lookup is case-insensitive and accepts the full name, the bare
    /// abbreviation, and the dotted abbreviation. Unrecognized or empty
    /// tags normalize to [`PartOfSpeech::Noun`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "noun" | "n" | ".n" => Self::Noun,
            "verb" | "v" | ".v" => Self::Verb,
            "adjective" | "adj" | ".adj" => Self::Adjective,
            "adverb" | "adv" | ".adv" => Self::Adverb,
            "preposition" | "prep" | ".prep" => Self::Preposition,
            "conjunction" | "conj" | ".conj" => Self::Conjunction,
            "pronoun" | "pron" | ".pron" => Self::Pronoun,
            "determiner" | "det" | ".det" => Self::Determiner,
            "numeral" | "num" | ".num" => Self::Numeral,
            "interjection" | "interj" | ".interj" => Self::Interjection,
            _ => Self::Noun,
        }
    }
}

impl Serialize for PartOfSpeech {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PartOfSpeech {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}

/// Whether an entry is a single token or a multi-word expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Word,
    Phrase,
}

impl ItemKind {
    /// Parse a raw kind value; anything other than `phrase` is a word.
    pub fn parse(value: &str) -> Self {
        match value {
            "phrase" => Self::Phrase,
            _ => Self::Word,
        }
    }
}

/// Proficiency tier that parameterizes the extraction instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    #[default]
    Medium,
    Advanced,
}

impl Difficulty {
    /// Parse a tier label; unrecognized labels default to `Medium`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "basic" => Self::Basic,
            "advanced" => Self::Advanced,
            _ => Self::Medium,
        }
    }

    /// Lowercase label, used in cache keys and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Medium => "medium",
            Self::Advanced => "advanced",
        }
    }
}

/// One extracted word or phrase.
///
/// Items leave the validator fully normalized: required fields present,
/// `pos`/`kind` canonical, definition within the length bound. The
/// orchestrator then stamps `segment_index` before handing them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Exact surface form as it appears in the source text
    pub word: String,

    /// Canonical part-of-speech code
    pub pos: PartOfSpeech,

    /// English definition, at most 100 characters
    pub definition: String,

    /// Translation/gloss in a secondary language (may be empty)
    #[serde(rename = "definition-ch", default)]
    pub definition_native: String,

    /// Illustrative phrases
    #[serde(rename = "common-usage", default)]
    pub usage_examples: Vec<String>,

    /// Single token vs. multi-word expression
    #[serde(rename = "type", default)]
    pub kind: ItemKind,

    /// 1-based index of the segment this item came from.
    ///
    /// `None` for items straight from the validator; assigned by the
    /// orchestrator at merge time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_spellings_normalize_to_same_code() {
        for tag in ["noun", "N", "n", ".n", " .N "] {
            assert_eq!(PartOfSpeech::parse(tag), PartOfSpeech::Noun, "tag {tag:?}");
        }
        assert_eq!(PartOfSpeech::parse("ADJ").code(), ".adj");
        assert_eq!(PartOfSpeech::parse("preposition").code(), ".prep");
    }

    #[test]
    fn test_pos_unknown_defaults_to_noun() {
        assert_eq!(PartOfSpeech::parse("xyz"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::parse(""), PartOfSpeech::Noun);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ItemKind::parse("phrase"), ItemKind::Phrase);
        assert_eq!(ItemKind::parse("word"), ItemKind::Word);
        assert_eq!(ItemKind::parse("idiom"), ItemKind::Word);
    }

    #[test]
    fn test_difficulty_parse_defaults_to_medium() {
        assert_eq!(Difficulty::parse("basic"), Difficulty::Basic);
        assert_eq!(Difficulty::parse("ADVANCED"), Difficulty::Advanced);
        assert_eq!(Difficulty::parse("expert"), Difficulty::Medium);
    }

    #[test]
    fn test_item_serializes_with_wire_names() {
        let item = VocabularyItem {
            word: "extract".to_string(),
            pos: PartOfSpeech::Verb,
            definition: "to remove or take out something".to_string(),
            definition_native: String::new(),
            usage_examples: vec!["extract data from reports".to_string()],
            kind: ItemKind::Word,
            segment_index: Some(1),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["pos"], ".v");
        assert_eq!(json["type"], "word");
        assert_eq!(json["common-usage"][0], "extract data from reports");
        assert_eq!(json["segment_index"], 1);
    }

    #[test]
    fn test_segment_index_omitted_when_unset() {
        let item = VocabularyItem {
            word: "aroma".to_string(),
            pos: PartOfSpeech::Noun,
            definition: "a pleasant smell".to_string(),
            definition_native: String::new(),
            usage_examples: vec![],
            kind: ItemKind::Word,
            segment_index: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("segment_index"));
    }
}
