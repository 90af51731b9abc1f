//! Input handling: export reading and tokenized-document discovery

use crate::error::CliError;
use anyhow::{Context, Result};
use doc2conll_core::{export, DocId, ExportRecord};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse the annotation export file.
pub fn load_export(path: &Path) -> Result<Vec<ExportRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    let records = export::parse_export(strip_bom(&content))
        .with_context(|| format!("Failed to parse export file: {}", path.display()))?;
    Ok(records)
}

/// Discover per-document token files in the working directory.
///
/// Files are named `<id>.txt` with a 1-based numeric id; any other `.txt`
/// file in the directory is an error. Results are sorted by id, so `10.txt`
/// sorts after `2.txt`.
pub fn discover_token_files(dir: &Path) -> Result<Vec<(DocId, PathBuf)>> {
    let pattern = dir.join("*.txt");
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid file pattern: {pattern}"))? {
        let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if !path.is_file() {
            continue;
        }
        files.push((parse_doc_id(&path)?, path));
    }

    if files.is_empty() {
        return Err(CliError::NoTokenFiles(dir.display().to_string()).into());
    }

    files.sort_by_key(|(id, _)| *id);
    Ok(files)
}

/// Read one tokenized document, one token per line, trailing newline
/// stripped and a leading byte-order mark tolerated.
pub fn read_token_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file: {}", path.display()))?;
    Ok(strip_bom(&content).lines().map(str::to_string).collect())
}

fn parse_doc_id(path: &Path) -> Result<DocId> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let id = stem
        .parse()
        .map_err(|_| CliError::InvalidDocumentFile(path.display().to_string()))?;
    Ok(DocId(id))
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}
