//! Error types for the conversion routines

use crate::document::DocId;
use crate::span::LabelSpan;
use thiserror::Error;

/// Errors produced while converting an annotation export into a corpus.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A record in the annotation export could not be parsed.
    #[error("export parse error at line {line}: {source}")]
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A tokenized document's reconstructed text matches no export record.
    #[error("document {doc}: reconstructed text matches no export record")]
    Lookup {
        /// Identifier of the document that could not be located.
        doc: DocId,
    },

    /// Label spans overlap, violating the alignment precondition.
    #[error("overlapping label spans: {first} and {second}")]
    OverlappingSpans {
        /// The earlier span by start offset.
        first: LabelSpan,
        /// The span that begins before the earlier one ends.
        second: LabelSpan,
    },
}

/// Result type for core conversion operations.
pub type Result<T> = std::result::Result<T, CoreError>;
