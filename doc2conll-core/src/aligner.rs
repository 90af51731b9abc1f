//! Span-to-IOB alignment
//!
//! Maps character-offset label spans onto a pre-tokenized sequence of token
//! lengths, emitting one IOB2 tag per token. This is the only component with
//! real invariants: span boundaries need not coincide with token boundaries,
//! spans may cover several tokens, and adjacent spans may touch without a gap.

use crate::error::{CoreError, Result};
use crate::span::LabelSpan;
use crate::tag::IobTag;

/// Align label spans to token lengths, producing one IOB2 tag per token.
///
/// `lengths` holds the character count of each token in text order. One
/// separator character is assumed between consecutive tokens, so a token
/// starting at offset `p` is followed by a token starting at `p + len + 1`.
///
/// Spans are sorted by start offset into a private copy and consumed front to
/// back with a cursor; the caller's slice is never mutated and repeated calls
/// return identical output. A span is retired once the cursor reaches or
/// passes its end offset, and a span becoming active after a retirement
/// always opens with `B-`, including the zero-gap case where it starts
/// exactly where its predecessor ended.
///
/// Overlapping spans violate the alignment precondition and are rejected
/// instead of producing silently wrong tags.
pub fn align(lengths: &[usize], spans: &[LabelSpan]) -> Result<Vec<IobTag>> {
    let mut ordered: Vec<&LabelSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| (span.start, span.end));
    for pair in ordered.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(CoreError::OverlappingSpans {
                first: pair[0].clone(),
                second: pair[1].clone(),
            });
        }
    }

    let mut tags = Vec::with_capacity(lengths.len());
    let mut index = 0usize;
    let mut inside_span = false;
    let mut cursor = 0usize;

    for &length in lengths {
        match ordered.get(cursor) {
            Some(span) if span.contains(index) => {
                tags.push(if inside_span {
                    IobTag::inside(span.label.clone())
                } else {
                    IobTag::begin(span.label.clone())
                });
                inside_span = true;
            }
            _ => {
                tags.push(IobTag::Outside);
                inside_span = false;
            }
        }
        // Advance past this token and its trailing separator. The overcount
        // after the last token is harmless: no span lookup follows it.
        index += length + 1;
        if let Some(span) = ordered.get(cursor) {
            if span.end <= index {
                cursor += 1;
                inside_span = false;
            }
        }
    }

    Ok(tags)
}
