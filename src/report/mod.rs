//! Rendering of association results to files.

pub mod network;
pub mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{config::Settings, mining::Association};

pub use network::render_network;
pub use table::{read_report, write_analysis, write_report};

/// Where rendered outputs go.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub report_csv: PathBuf,
    pub network_html: PathBuf,
    pub analysis_txt: PathBuf,
}

impl ReportPaths {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            report_csv: settings.join_report("association_report.csv"),
            network_html: settings.join_generated("association_network.html"),
            analysis_txt: settings.join_report("network_analysis.txt"),
        }
    }
}

/// Files written by [`render`].
#[derive(Debug, Clone, Default)]
pub struct RenderedOutputs {
    pub report_csv: Option<PathBuf>,
    pub network_html: Option<PathBuf>,
}

/// Write the CSV report and the network diagram.
///
/// The diagram is skipped when there are no associations.
pub fn render(associations: &[Association], paths: &ReportPaths) -> Result<RenderedOutputs> {
    let mut outputs = RenderedOutputs::default();

    write_report(associations, &paths.report_csv)?;
    outputs.report_csv = Some(paths.report_csv.clone());

    match render_network(associations)? {
        Some(html) => {
            if let Some(parent) = paths.network_html.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&paths.network_html, html)
                .with_context(|| format!("write {}", paths.network_html.display()))?;
            info!(path = %paths.network_html.display(), "saved network visualization");
            outputs.network_html = Some(paths.network_html.clone());
        }
        None => warn!("no associations to draw; skipping network diagram"),
    }
    Ok(outputs)
}
