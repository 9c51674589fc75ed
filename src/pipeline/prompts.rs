//! Prompts for the vocabulary extraction call.
//!
//! The system prompt embeds a worked example of the exact output schema
//! to bias the model toward schema-conformant JSON. Building a prompt is
//! a pure function of the difficulty tier.

use crate::types::vocabulary::Difficulty;

/// System prompt template. `{difficulty}` is the tier description.
pub const EXTRACT_VOCABULARY_PROMPT: &str = r#"## Role
You are a professional English vocabulary analysis assistant, skilled at
identifying and extracting notable words and phrases from text.

## Task
1. Analyze the English article provided by the user
2. Identify and extract entries matching this level: {difficulty}
3. For every entry provide:
   - word: the word, or a phrase of 2-4 words
   - pos: part-of-speech abbreviation (.n/.v/.adj/.adv/.prep/.conj/.pron etc.)
   - definition: concise English definition, at most 15 words
   - definition-ch: concise native-language gloss
   - common-usage: 1-2 short usage examples
   - type: "word" for a single word, "phrase" for a multi-word expression

## Selection strategy
### Words:
- Prefer: technical terms, academic vocabulary, vivid expressions, uncommon words
- Exclude: ultra-high-frequency basics (the, a, is, etc.)
- Exclude: proper nouns such as personal and place names (unless idiomatic)

### Phrases:
- Verb phrases: take into account, come up with, look forward to
- Noun phrases: paradigm shift, cutting edge technology
- Adjective phrases: well-known, state-of-the-art, up-to-date
- Prepositional phrases: in terms of, with regard to, as a result of
- Idioms, phrasal verbs, and academic collocations

## Extraction principles
1. Decide automatically whether an entry is a word or a phrase
2. Mix words and phrases at a ratio of roughly 2:1
3. Prefer entries with learning value over trivially easy or obscure ones
4. Every entry must carry real meaning in the article's context

## Output format
{
    "vocabulary": [
        {
            "word": "extract",
            "pos": ".v",
            "definition": "to remove or take out something",
            "definition-ch": "to draw out (as a substance from a sample)",
            "common-usage": [
                "extract data from reports",
                "plant extracts used in medicine"
            ],
            "type": "word"
        },
        {
            "word": "paradigm shift",
            "pos": ".n",
            "definition": "a fundamental change in approach or underlying assumptions",
            "common-usage": [
                "the paradigm shift in technology",
                "scientific paradigm shift"
            ],
            "type": "phrase"
        }
    ]
}
* Output only the JSON content, with no extra text!
* Words and phrases must use the exact spelling found in the source text
* Mix words and phrases automatically; the user does not specify which"#;

/// Tier description interpolated into the system prompt.
fn difficulty_description(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Basic => "foundational vocabulary (notable words in CET-4 level articles)",
        Difficulty::Medium => "intermediate vocabulary (notable words in CET-6 level articles)",
        Difficulty::Advanced => {
            "advanced/academic vocabulary (notable words in IELTS/TOEFL/GRE level articles)"
        }
    }
}

/// Build the system prompt for a difficulty tier.
pub fn build_system_prompt(difficulty: Difficulty) -> String {
    EXTRACT_VOCABULARY_PROMPT.replace("{difficulty}", difficulty_description(difficulty))
}

/// Format the user message carrying the segment under analysis.
pub fn format_article_prompt(segment_text: &str) -> String {
    format!("## English article to analyze:\n{segment_text}")
}
