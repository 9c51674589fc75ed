//! CSV shaping of extraction results.
//!
//! The spreadsheet collaborator consumes flat rows: usage examples are
//! joined with ` | `, optional fields fall back to empty placeholders,
//! and three blank study columns (`example`, `mastery`, `notes`) are
//! appended for the reader to fill in. Writing the output anywhere,
//! and any styling, stays with the caller.

use crate::error::{ExtractError, Result};
use crate::types::vocabulary::VocabularyItem;

/// Column order the export collaborator expects.
pub const COLUMNS: [&str; 8] = [
    "word",
    "pos",
    "definition",
    "definition-ch",
    "common-usage",
    "example",
    "mastery",
    "notes",
];

/// Delimiter between joined usage examples.
pub const USAGE_DELIMITER: &str = " | ";

/// Flatten one item into a row matching [`COLUMNS`].
pub fn to_row(item: &VocabularyItem) -> Vec<String> {
    vec![
        item.word.clone(),
        item.pos.code().to_string(),
        item.definition.clone(),
        item.definition_native.clone(),
        item.usage_examples.join(USAGE_DELIMITER),
        String::new(),
        String::new(),
        String::new(),
    ]
}

/// Render items as a CSV document with a header row.
///
/// An empty item list yields just the header.
pub fn to_csv(items: &[VocabularyItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .map_err(|e| ExtractError::Export(Box::new(e)))?;
    for item in items {
        writer
            .write_record(to_row(item))
            .map_err(|e| ExtractError::Export(Box::new(e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractError::Export(Box::new(e)))?;
    String::from_utf8(bytes).map_err(|e| ExtractError::Export(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::vocabulary::{ItemKind, PartOfSpeech};

    fn sample_item() -> VocabularyItem {
        VocabularyItem {
            word: "paradigm shift".to_string(),
            pos: PartOfSpeech::Noun,
            definition: "a fundamental change in approach".to_string(),
            definition_native: String::new(),
            usage_examples: vec![
                "the paradigm shift in technology".to_string(),
                "scientific paradigm shift".to_string(),
            ],
            kind: ItemKind::Phrase,
            segment_index: Some(2),
        }
    }

    #[test]
    fn test_row_joins_usage_with_delimiter() {
        let row = to_row(&sample_item());
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[1], ".n");
        assert_eq!(
            row[4],
            "the paradigm shift in technology | scientific paradigm shift"
        );
        assert_eq!(row[5], "");
    }

    #[test]
    fn test_missing_optional_fields_become_placeholders() {
        let mut item = sample_item();
        item.definition_native = String::new();
        item.usage_examples = vec![];

        let row = to_row(&item);
        assert_eq!(row[3], "");
        assert_eq!(row[4], "");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = to_csv(&[sample_item()]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "word,pos,definition,definition-ch,common-usage,example,mastery,notes"
        );
        assert!(lines.next().unwrap().starts_with("paradigm shift,.n,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut item = sample_item();
        item.definition = "a change, fundamental in nature".to_string();

        let csv = to_csv(&[item]).unwrap();
        assert!(csv.contains("\"a change, fundamental in nature\""));
    }

    #[test]
    fn test_empty_list_yields_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), COLUMNS.join(","));
    }
}
