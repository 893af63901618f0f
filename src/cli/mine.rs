//! CLI entry-point for the full mining pipeline.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    mining::{CollisionPolicy, RecognizerFailurePolicy},
    nlp::{self, RecognizerKind},
    pipeline::{LiteratureMining, RunOutcome},
};

/// Args for the `mine` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory containing input documents (defaults to the raw data dir).
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    /// Entity recognizer backend.
    #[arg(long, default_value = "dictionary", value_enum)]
    pub recognizer: RecognizerKind,
    /// Behaviour when the recognizer fails on a sentence.
    #[arg(long, default_value = "abort", value_enum)]
    pub on_recognizer_error: RecognizerFailurePolicy,
    /// Handling of names used both as gene and disease.
    #[arg(long, default_value = "separate", value_enum)]
    pub collision: CollisionPolicy,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    // recognizers may block on model inference, so build and drop them off the runtime
    let outcome = tokio::task::spawn_blocking(move || -> Result<RunOutcome> {
        let recognizer = nlp::load_recognizer(&settings, args.recognizer)?;
        let mut pipeline = LiteratureMining::new(
            settings,
            args.input_dir,
            recognizer,
            args.on_recognizer_error,
            args.collision,
        );
        pipeline.run()
    })
    .await
    .context("mining task panicked")??;

    match outcome {
        RunOutcome::NoDocuments => bail!("no data to process"),
        RunOutcome::NoAssociations { sentences } => {
            info!(sentences, "no associations found; nothing written");
        }
        RunOutcome::Completed {
            sentences,
            associations,
            analysis,
            outputs,
        } => {
            info!(sentences, associations, ?outputs, "mining finished");
            for (key, value) in analysis.entries() {
                println!("{key}: {value}");
            }
        }
    }
    Ok(())
}
