//! Raw text document loading.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::MiningError;

/// Extension of the documents picked up from the input directory.
pub const TEXT_FILE_EXTENSION: &str = "txt";

/// A raw input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub text: String,
}

/// Load every `*.txt` file directly inside `dir`, sorted by file name.
pub fn load_text_files(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(MiningError::InvalidInput(format!(
            "input directory {} does not exist",
            dir.display()
        ))
        .into());
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|s| s.to_str()) != Some(TEXT_FILE_EXTENSION)
        {
            continue;
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded document");
        documents.push(Document {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            text,
        });
    }
    info!(dir = %dir.display(), count = documents.len(), "loaded documents");
    Ok(documents)
}
