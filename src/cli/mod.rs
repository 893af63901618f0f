//! Command-line interface wiring for gene-miner.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod fetch;
pub mod mine;
pub mod preprocess;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Literature mining tool for gene-disease associations",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Fetch(args) => fetch::run(args, settings).await,
            Commands::Preprocess(args) => preprocess::run(args, settings).await,
            Commands::Mine(args) => mine::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download PubMed abstracts into the raw document directory.
    Fetch(fetch::Args),
    /// Split documents into cleaned sentences without running extraction.
    Preprocess(preprocess::Args),
    /// Run the full pipeline: sentences, entities, associations, reports.
    Mine(mine::Args),
}
