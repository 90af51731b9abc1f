//! Character-offset label spans from the annotation export

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open `[start, end)` character range in a document's untokenized
/// text, paired with the annotator's label.
///
/// Offsets count characters of the original text, including the single-space
/// separators between tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLabel", into = "RawLabel")]
pub struct LabelSpan {
    /// First character covered by the span.
    pub start: usize,
    /// First character past the span.
    pub end: usize,
    /// Annotator-assigned label name, e.g. `PER`.
    pub label: String,
}

/// The export serializes each label as a bare `[start, end, name]` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawLabel(usize, usize, String);

impl From<RawLabel> for LabelSpan {
    fn from(raw: RawLabel) -> Self {
        LabelSpan {
            start: raw.0,
            end: raw.1,
            label: raw.2,
        }
    }
}

impl From<LabelSpan> for RawLabel {
    fn from(span: LabelSpan) -> Self {
        RawLabel(span.start, span.end, span.label)
    }
}

impl LabelSpan {
    /// Create a span covering `[start, end)`.
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        LabelSpan {
            start,
            end,
            label: label.into(),
        }
    }

    /// Whether the character at `offset` falls inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for LabelSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) {}", self.start, self.end, self.label)
    }
}
