//! IOB2 tag representation
//!
//! IOB2 marks the first token of a labeled span `B-<label>`, subsequent
//! tokens of the same span `I-<label>`, and tokens outside any span `O`.

use std::fmt;

/// One IOB2 tag attached to a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IobTag {
    /// Token lies outside every labeled span.
    Outside,
    /// First token of a labeled span.
    Begin(String),
    /// Continuation token of a labeled span.
    Inside(String),
}

impl IobTag {
    /// Build a `B-` tag for the given label.
    pub fn begin(label: impl Into<String>) -> Self {
        IobTag::Begin(label.into())
    }

    /// Build an `I-` tag for the given label.
    pub fn inside(label: impl Into<String>) -> Self {
        IobTag::Inside(label.into())
    }

    /// Whether this is the `O` tag.
    pub fn is_outside(&self) -> bool {
        matches!(self, IobTag::Outside)
    }

    /// The label carried by a `B-` or `I-` tag.
    pub fn label(&self) -> Option<&str> {
        match self {
            IobTag::Outside => None,
            IobTag::Begin(label) | IobTag::Inside(label) => Some(label),
        }
    }
}

impl fmt::Display for IobTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IobTag::Outside => write!(f, "O"),
            IobTag::Begin(label) => write!(f, "B-{label}"),
            IobTag::Inside(label) => write!(f, "I-{label}"),
        }
    }
}
