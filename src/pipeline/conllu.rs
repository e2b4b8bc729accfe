//! CoNLL-U reading and writing
//!
//! The interchange format between the external parsing pipeline and the
//! profiler: one 10-column tab-separated row per token, a blank line
//! between sentences, `#` comment lines before a sentence. The profiler
//! only consumes the FORM (column 2) and XPOS (column 5) columns; the
//! writer emits full rows so output stays loadable by standard CoNLL-U
//! tooling.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::{Document, Sentence, TaggedToken};

/// Number of columns in a CoNLL-U token row.
const NUM_COLUMNS: usize = 10;

/// Parse a CoNLL-U string into a tagged document.
///
/// Multiword-token ranges (`1-2`) and empty nodes (`1.1`) are skipped:
/// the profiler works on the syntactic word rows only.
pub fn parse_document(input: &str) -> Result<Document> {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut current: Sentence = Vec::new();

    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != NUM_COLUMNS {
            bail!(
                "line {}: expected {} tab-separated columns, found {}",
                lineno + 1,
                NUM_COLUMNS,
                cols.len()
            );
        }
        // Skip multiword ranges and empty nodes
        if cols[0].contains('-') || cols[0].contains('.') {
            continue;
        }
        current.push(TaggedToken::new(cols[1], cols[4]));
    }
    if !current.is_empty() {
        sentences.push(current);
    }

    Ok(Document::new(sentences))
}

/// Read and parse a CoNLL-U file.
pub fn read_document(path: &Path) -> Result<Document> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&input).with_context(|| format!("invalid CoNLL-U in {}", path.display()))
}

/// Serialize a document to CoNLL-U: token id, form, and XPOS filled in,
/// remaining columns underscored, blank line after each sentence.
pub fn write_document(document: &Document) -> String {
    let mut out = String::new();
    for sentence in &document.sentences {
        for (i, token) in sentence.iter().enumerate() {
            let row = [
                (i + 1).to_string(),
                token.form.clone(),
                "_".to_string(),
                "_".to_string(),
                token.tag.clone(),
                "_".to_string(),
                "_".to_string(),
                "_".to_string(),
                "_".to_string(),
                "_".to_string(),
            ];
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
