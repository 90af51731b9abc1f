//! Convert command implementation
//!
//! Drives the batch pipeline end to end: load the annotation export,
//! materialize per-document token files, align spans onto the externally
//! tokenized documents, write tagged files, and assemble the
//! sentinel-delimited corpus. The run is fully sequential and fails fast;
//! re-running from scratch is the recovery strategy for a partial output
//! directory.

use crate::input;
use crate::output;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use doc2conll_core::{align, corpus, document, CoreError, DocId, ExportRecord, TaggedToken};
use std::path::PathBuf;

/// Arguments for the conversion pipeline
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Annotation export file (doccano .json1)
    #[arg(value_name = "EXPORT")]
    pub export: PathBuf,

    /// Working directory for per-document tokenized text
    #[arg(value_name = "TOKENS_DIR")]
    pub tokens_dir: PathBuf,

    /// Output directory for tagged text
    #[arg(value_name = "TAGGED_DIR")]
    pub tagged_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the conversion pipeline
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        output::ensure_dir(&self.tokens_dir)?;
        output::ensure_dir(&self.tagged_dir)?;

        let records = input::load_export(&self.export)?;
        self.milestone(format!(
            "1. Export file is loaded.\n   Total texts: {}",
            records.len()
        ));

        for (position, record) in records.iter().enumerate() {
            let id = DocId(position as u32 + 1);
            output::write_token_file(&self.tokens_dir, id, &record.text)?;
        }
        let token_files = input::discover_token_files(&self.tokens_dir)?;
        self.milestone(format!(
            "2. Tokenized texts are generated in {}.\n   Files: {}",
            self.tokens_dir.display(),
            token_files.len()
        ));

        let mut documents: Vec<(DocId, Vec<TaggedToken>)> = Vec::with_capacity(token_files.len());
        for (id, path) in &token_files {
            let tokens = input::read_token_file(path)?;
            let tagged = align_document(*id, &tokens, &records)?;
            output::write_tagged_file(&self.tagged_dir, *id, &tagged)?;
            documents.push((*id, tagged));
        }
        self.milestone(format!(
            "3. Tagged texts are generated in {}.\n   Files: {}",
            self.tagged_dir.display(),
            documents.len()
        ));

        self.milestone("4. Generating CoNLL formatted file.".to_string());
        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_documents(documents.len() as u64);
        let mut rows = Vec::new();
        for (id, tagged) in &documents {
            rows.extend(corpus::document_rows(tagged));
            reporter.document_completed(*id);
        }
        reporter.finish();

        let corpus_path = output::corpus_path(&self.export);
        output::write_corpus(&corpus_path, &corpus::finish_corpus(&rows))?;
        log::info!("Corpus written to {}", corpus_path.display());

        Ok(())
    }

    fn milestone(&self, text: String) {
        if !self.quiet {
            println!("{text}");
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Locate the export record matching a tokenized document and tag its tokens.
///
/// The match is by exact text equality: the tokens joined by single spaces
/// must reproduce one of the export texts. A miss is fatal for the whole run.
fn align_document(
    id: DocId,
    tokens: &[String],
    records: &[ExportRecord],
) -> Result<Vec<TaggedToken>> {
    let reconstructed = document::reconstruct_text(tokens);
    let record = records
        .iter()
        .find(|record| record.text == reconstructed)
        .ok_or(CoreError::Lookup { doc: id })?;

    let lengths = document::token_lengths(tokens);
    let tags = align(&lengths, &record.labels)?;

    Ok(tokens
        .iter()
        .zip(tags)
        .map(|(text, tag)| TaggedToken {
            text: text.clone(),
            tag,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc2conll_core::LabelSpan;

    fn record(text: &str, labels: Vec<LabelSpan>) -> ExportRecord {
        ExportRecord {
            text: text.to_string(),
            labels,
        }
    }

    #[test]
    fn test_align_document_tags_matching_record() {
        let records = vec![record("AB C DEF", vec![LabelSpan::new(0, 4, "PER")])];
        let tokens = vec!["AB".to_string(), "C".to_string(), "DEF".to_string()];

        let tagged = align_document(DocId(1), &tokens, &records).unwrap();
        let tags: Vec<String> = tagged.iter().map(|t| t.tag.to_string()).collect();
        assert_eq!(tags, vec!["B-PER", "I-PER", "O"]);
    }

    #[test]
    fn test_align_document_lookup_miss_names_document() {
        let records = vec![record("AB C DEF", vec![])];
        let tokens = vec!["ZZZ".to_string()];

        let err = align_document(DocId(9), &tokens, &records).unwrap_err();
        assert!(err.to_string().contains("document 9"));
    }
}
