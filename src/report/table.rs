//! CSV association report and plain-text network analysis.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::mining::{Association, NetworkAnalysis};

#[derive(Debug, Deserialize)]
struct ReportRow {
    gene: String,
    disease: String,
    sentence: String,
    confidence: f64,
}

/// Write associations as `gene,disease,sentence,confidence`, in extraction order.
pub fn write_report(associations: &[Association], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for association in associations {
        writer.serialize(association)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = associations.len(), "saved association report");
    Ok(())
}

/// Parse a report back into validated associations.
pub fn read_report(path: &Path) -> Result<Vec<Association>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for (line, row) in reader.deserialize::<ReportRow>().enumerate() {
        let row = row.with_context(|| format!("row {} of {}", line + 1, path.display()))?;
        out.push(Association::new(
            row.gene,
            row.disease,
            row.sentence,
            row.confidence,
        )?);
    }
    Ok(out)
}

/// Write the analysis as `<key>: <value>` lines.
pub fn write_analysis(analysis: &NetworkAnalysis, path: &Path) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    for (key, value) in analysis.entries() {
        writeln!(file, "{key}: {value}")?;
    }
    info!(path = %path.display(), "saved network analysis");
    Ok(())
}
