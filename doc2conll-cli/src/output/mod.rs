//! Output handling: token files, tagged files and the final corpus

use anyhow::{Context, Result};
use doc2conll_core::{document, DocId, TaggedToken};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension marker of the annotation export file.
const EXPORT_MARKER: &str = ".json1";

/// Suffix of the assembled corpus file.
const CORPUS_SUFFIX: &str = "_annotated.txt";

/// Create a directory (and its parents) if absent.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Materialize a document's text as a one-token-per-line file named
/// `<id>.txt`, the artifact handed to the external tokenizer.
pub fn write_token_file(dir: &Path, id: DocId, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{id}.txt"));
    let content = document::tokenize_text(text).join("\n");
    fs::write(&path, content)
        .with_context(|| format!("Failed to write token file: {}", path.display()))?;
    Ok(path)
}

/// Write a document's tagged lines, one per token, with each line's trailing
/// field replaced by its IOB2 tag.
pub fn write_tagged_file(dir: &Path, id: DocId, tokens: &[TaggedToken]) -> Result<PathBuf> {
    let path = dir.join(format!("{id}.txt"));
    let lines: Vec<String> = tokens
        .iter()
        .map(|token| document::replace_trailing_field(&token.text, &token.tag))
        .collect();
    fs::write(&path, lines.join("\n"))
        .with_context(|| format!("Failed to write tagged file: {}", path.display()))?;
    Ok(path)
}

/// Derive the corpus path from the export path: `.json1` in the file name
/// becomes `_annotated.txt`. When the marker is absent the suffix is
/// appended, so the export itself is never overwritten.
pub fn corpus_path(export: &Path) -> PathBuf {
    let name = export
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let corpus_name = if name.contains(EXPORT_MARKER) {
        name.replace(EXPORT_MARKER, CORPUS_SUFFIX)
    } else {
        format!("{name}{CORPUS_SUFFIX}")
    };
    export.with_file_name(corpus_name)
}

/// Write the assembled corpus text.
pub fn write_corpus(path: &Path, corpus: &str) -> Result<()> {
    fs::write(path, corpus)
        .with_context(|| format!("Failed to write corpus file: {}", path.display()))
}
