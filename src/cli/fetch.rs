//! CLI entry-point for fetching PubMed abstracts.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::pubmed::{self, PubmedClient},
};

/// Args for the `fetch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Free-text PubMed query, e.g. "BRCA1 breast cancer".
    #[arg(long)]
    pub query: String,
    /// Override the maximum number of abstracts.
    #[arg(long)]
    pub max_results: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let max = args.max_results.unwrap_or(settings.max_pubmed_results);
    let client = PubmedClient::new(&settings)?;

    info!(query = %args.query, max, "searching pubmed");
    let pmids = client
        .search(&args.query, max)
        .await
        .with_context(|| format!("search pubmed for {}", args.query))?;
    let abstracts = client
        .fetch(&pmids)
        .await
        .with_context(|| format!("fetch {} pubmed abstracts", pmids.len()))?;
    for article in &abstracts {
        let authors = if article.authors.is_empty() {
            "Unknown".to_string()
        } else {
            article.authors.join(", ")
        };
        println!("{:-<80}", "");
        println!("PMID: {}", article.pmid);
        println!("Title: {}", article.title);
        println!("Authors: {authors}");
        match article.year {
            Some(year) => println!("Year: {year}"),
            None => println!("Year: unknown"),
        }
    }
    pubmed::persist_abstracts(&abstracts, &settings.raw_dir)?;
    Ok(())
}
