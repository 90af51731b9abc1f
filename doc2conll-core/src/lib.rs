//! Core conversion logic for doc2conll
//!
//! Converts character-offset span labels produced by a text-annotation tool,
//! together with externally tokenized text, into IOB2-tagged tokens and a
//! sentinel-delimited CoNLL-style corpus.
//!
//! The crate is pure: no file I/O and no logging. The pipeline driving these
//! routines lives in the `doc2conll-cli` crate.
//!
//! - [`export`]: repair and parse the annotation tool's export records.
//! - [`aligner`]: map label spans onto token lengths, one IOB2 tag per token.
//! - [`document`]: typed document ids and token-level text operations.
//! - [`corpus`]: assemble tagged documents into the final corpus text.

#![warn(missing_docs)]

pub mod aligner;
pub mod corpus;
pub mod document;
pub mod error;
pub mod export;
pub mod span;
pub mod tag;

pub use aligner::align;
pub use corpus::{assemble_corpus, DOCSTART_ROW};
pub use document::{DocId, TaggedToken};
pub use error::{CoreError, Result};
pub use export::{parse_export, ExportRecord};
pub use span::LabelSpan;
pub use tag::IobTag;
