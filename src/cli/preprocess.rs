//! CLI entry-point for sentence preprocessing only.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    data::{documents, preprocess},
};

/// Args for the `preprocess` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory containing input documents (defaults to the raw data dir).
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let input_dir = args.input_dir.unwrap_or_else(|| settings.raw_dir.clone());
    let docs = documents::load_text_files(&input_dir)?;
    let rows = preprocess::process_documents(&docs);
    let path = settings.join_processed("processed_documents.csv");
    preprocess::write_processed(&rows, &path)?;
    println!("{} sentences -> {}", rows.len(), path.display());
    Ok(())
}
