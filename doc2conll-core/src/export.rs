//! Annotation export parsing
//!
//! The annotation tool exports one JSON record per line, not necessarily
//! separated by commas or wrapped in an array, so the file as a whole is not
//! valid JSON. Records are repaired and parsed line by line, and the first
//! malformed record is reported with its line number.

use crate::error::{CoreError, Result};
use crate::span::LabelSpan;
use serde::Deserialize;

/// One annotated document from the export.
///
/// Unknown fields in the export (record ids, metadata) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRecord {
    /// Full document text, tokens separated by single spaces.
    pub text: String,
    /// Annotated spans; records without annotations omit the field.
    #[serde(default)]
    pub labels: Vec<LabelSpan>,
}

/// Parse an annotation export into its records.
///
/// Each non-empty line is treated as one record. A trailing comma left over
/// from array-style exports is stripped before parsing.
pub fn parse_export(content: &str) -> Result<Vec<ExportRecord>> {
    let mut records = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let record = line.trim().trim_end_matches(',');
        if record.is_empty() {
            continue;
        }
        let parsed = serde_json::from_str(record).map_err(|source| CoreError::Parse {
            line: number + 1,
            source,
        })?;
        records.push(parsed);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenated_records_without_commas() {
        let content = "{\"text\":\"a\"}\n{\"text\":\"b\"}\n";
        let records = parse_export(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "a");
        assert_eq!(records[1].text, "b");
        assert!(records[0].labels.is_empty());
    }

    #[test]
    fn test_records_with_trailing_commas() {
        let content = "{\"text\":\"a\"},\n{\"text\":\"b\"},\n";
        let records = parse_export(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text, "b");
    }

    #[test]
    fn test_labels_parsed_from_arrays() {
        let content = r#"{"text":"AB C DEF","labels":[[0,4,"PER"]]}"#;
        let records = parse_export(content).unwrap();
        assert_eq!(records[0].labels, vec![LabelSpan::new(0, 4, "PER")]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = r#"{"id":12,"text":"a","labels":[],"meta":{"source":"x"}}"#;
        let records = parse_export(content).unwrap();
        assert_eq!(records[0].text, "a");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "{\"text\":\"a\"}\n\n{\"text\":\"b\"}\n";
        assert_eq!(parse_export(content).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_record_reports_line_number() {
        let content = "{\"text\":\"a\"}\n{\"text\":}\n";
        let err = parse_export(content).unwrap_err();
        match err {
            CoreError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_text_field_is_an_error() {
        let content = r#"{"labels":[[0,1,"PER"]]}"#;
        assert!(parse_export(content).is_err());
    }
}
