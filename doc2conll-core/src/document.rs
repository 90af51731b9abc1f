//! Document identity and token-level text operations

use crate::tag::IobTag;
use std::fmt;

/// Separator embedded in a token line to delimit auxiliary fields such as a
/// part-of-speech tag. This is a literal backslash-s, not a regex class.
pub const FIELD_SEPARATOR: &str = "\\s";

/// 1-based document identifier, assigned in export record order and carried
/// from token-file discovery through corpus assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(
    /// The numeric id, also the stem of the document's token file name.
    pub u32,
);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A token line paired with its computed IOB2 tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token line as read from the tokenized file.
    pub text: String,
    /// The tag assigned by the aligner.
    pub tag: IobTag,
}

/// Split a document's text into tokens on single spaces.
pub fn tokenize_text(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Character length of each token.
///
/// Export offsets count characters, so byte lengths would misalign on any
/// non-ASCII text.
pub fn token_lengths<S: AsRef<str>>(tokens: &[S]) -> Vec<usize> {
    tokens
        .iter()
        .map(|token| token.as_ref().chars().count())
        .collect()
}

/// Join tokens back into the document text used to look up its spans.
pub fn reconstruct_text<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace the trailing [`FIELD_SEPARATOR`]-delimited field of a token line
/// with the tag.
///
/// A line without the separator consists of a single field and is replaced
/// entirely by the tag.
pub fn replace_trailing_field(line: &str, tag: &IobTag) -> String {
    let tag_text = tag.to_string();
    let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if let Some(last) = fields.last_mut() {
        *last = &tag_text;
    }
    fields.join(FIELD_SEPARATOR)
}
