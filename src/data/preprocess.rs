//! Sentence splitting and text normalisation.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::data::documents::Document;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n\s*\n").expect("valid regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A cleaned sentence and the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedSentence {
    pub file_name: String,
    pub sentence: String,
    pub processed: bool,
}

/// Split text into sentences on terminal punctuation and blank lines.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(text[start..boundary.end()].trim().to_string());
        start = boundary.end();
    }
    sentences.push(text[start..].trim().to_string());
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Lowercase, strip punctuation other than hyphens and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let stripped = NON_WORD.replace_all(text, " ");
    WHITESPACE
        .replace_all(&stripped, " ")
        .trim()
        .to_lowercase()
}

/// Split every document into cleaned sentences, preserving document order.
pub fn process_documents(documents: &[Document]) -> Vec<ProcessedSentence> {
    let rows: Vec<ProcessedSentence> = documents
        .iter()
        .flat_map(|doc| {
            split_sentences(&doc.text)
                .into_iter()
                .map(|sentence| clean_text(&sentence))
                .filter(|sentence| !sentence.is_empty())
                .map(|sentence| ProcessedSentence {
                    file_name: doc.file_name.clone(),
                    sentence,
                    processed: true,
                })
        })
        .collect();
    info!(documents = documents.len(), sentences = rows.len(), "processed documents");
    rows
}

/// Persist the processed sentence table as CSV.
pub fn write_processed(rows: &[ProcessedSentence], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "saved processed documents");
    Ok(())
}
