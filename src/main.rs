//! Entry point wiring CLI dispatch to pipeline modules.

use anyhow::Result;
use gene_miner::{cli::Cli, config::Settings, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;
    logging::init_tracing(cli.debug, Some(settings.log_dir.as_path()))?;

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
