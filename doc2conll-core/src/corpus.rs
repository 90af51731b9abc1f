//! Corpus assembly
//!
//! Concatenates per-document tagged tokens into the final corpus text. Rows
//! are collected into a growable vector and joined once at the end.

use crate::document::TaggedToken;

/// Sentinel row opening each document block.
pub const DOCSTART_ROW: &str = "-DOCSTART- O";

/// Rows contributed by one document: the sentinel followed by one
/// `token tag` row per token.
pub fn document_rows(tokens: &[TaggedToken]) -> Vec<String> {
    let mut rows = Vec::with_capacity(tokens.len() + 1);
    rows.push(DOCSTART_ROW.to_string());
    for token in tokens {
        rows.push(format!("{} {}", token.text, token.tag));
    }
    rows
}

/// Join collected rows into the corpus text and apply the final fix-up:
/// the literal `"| O"` sequence is removed wherever it occurs, compensating
/// for tokens that embed a vertical-bar-delimited field.
pub fn finish_corpus(rows: &[String]) -> String {
    rows.join("\n").replace("| O", "")
}

/// Assemble tagged documents, in order, into the final corpus text.
pub fn assemble_corpus(documents: &[Vec<TaggedToken>]) -> String {
    let mut rows = Vec::new();
    for tokens in documents {
        rows.extend(document_rows(tokens));
    }
    finish_corpus(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::IobTag;

    fn tagged(text: &str, tag: IobTag) -> TaggedToken {
        TaggedToken {
            text: text.to_string(),
            tag,
        }
    }

    #[test]
    fn test_document_rows_start_with_sentinel() {
        let tokens = vec![
            tagged("AB", IobTag::begin("PER")),
            tagged("C", IobTag::inside("PER")),
        ];
        let rows = document_rows(&tokens);
        assert_eq!(rows, vec!["-DOCSTART- O", "AB B-PER", "C I-PER"]);
    }

    #[test]
    fn test_assemble_joins_documents_in_order() {
        let documents = vec![
            vec![tagged("AB", IobTag::begin("PER"))],
            vec![tagged("X", IobTag::Outside)],
        ];
        let corpus = assemble_corpus(&documents);
        assert_eq!(corpus, "-DOCSTART- O\nAB B-PER\n-DOCSTART- O\nX O");
    }

    #[test]
    fn test_vertical_bar_rows_are_scrubbed() {
        let documents = vec![vec![
            tagged("X", IobTag::Outside),
            tagged("|", IobTag::Outside),
            tagged("Y", IobTag::Outside),
        ]];
        let corpus = assemble_corpus(&documents);
        assert_eq!(corpus, "-DOCSTART- O\nX O\n\nY O");
    }

    #[test]
    fn test_empty_document_contributes_only_sentinel() {
        let documents = vec![vec![]];
        assert_eq!(assemble_corpus(&documents), "-DOCSTART- O");
    }
}
