//! End-to-end literature mining run: documents to reports.

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    config::Settings,
    data::{
        documents,
        preprocess::{self, ProcessedSentence},
    },
    mining::{
        Association, AssociationExtractor, AssociationGraph, CollisionPolicy, NetworkAnalysis,
        RecognizerFailurePolicy,
    },
    nlp::EntityRecognizer,
    report::{self, RenderedOutputs, ReportPaths},
};

/// Result of a pipeline run that did not fail.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input directory held no usable sentences.
    NoDocuments,
    /// Sentences were processed but no gene/disease pair co-occurred.
    NoAssociations { sentences: usize },
    Completed {
        sentences: usize,
        associations: usize,
        analysis: NetworkAnalysis,
        outputs: RenderedOutputs,
    },
}

/// Wires preprocessing, extraction, graph analysis and reporting together.
pub struct LiteratureMining {
    settings: Settings,
    input_dir: PathBuf,
    extractor: AssociationExtractor,
    graph: AssociationGraph,
}

impl LiteratureMining {
    pub fn new(
        settings: Settings,
        input_dir: Option<PathBuf>,
        recognizer: Arc<dyn EntityRecognizer>,
        failure_policy: RecognizerFailurePolicy,
        collision_policy: CollisionPolicy,
    ) -> Self {
        let input_dir = input_dir.unwrap_or_else(|| settings.raw_dir.clone());
        info!(input = %input_dir.display(), "initializing literature mining pipeline");
        Self {
            settings,
            input_dir,
            extractor: AssociationExtractor::new(recognizer).with_failure_policy(failure_policy),
            graph: AssociationGraph::new(collision_policy),
        }
    }

    /// Load, split and clean every document, saving the sentence table.
    pub fn process_documents(&self) -> Result<Vec<ProcessedSentence>> {
        let docs = documents::load_text_files(&self.input_dir)?;
        if docs.is_empty() {
            warn!(dir = %self.input_dir.display(), "no documents found in input directory");
            return Ok(Vec::new());
        }
        let rows = preprocess::process_documents(&docs);
        preprocess::write_processed(
            &rows,
            &self.settings.join_processed("processed_documents.csv"),
        )?;
        Ok(rows)
    }

    pub fn extract_associations(&self, rows: &[ProcessedSentence]) -> Result<Vec<Association>> {
        let sentences: Vec<&str> = rows.iter().map(|r| r.sentence.as_str()).collect();
        Ok(self.extractor.extract_associations(&sentences)?)
    }

    /// Accumulate associations into the graph and write every report.
    pub fn generate_outputs(
        &mut self,
        associations: &[Association],
    ) -> Result<(NetworkAnalysis, RenderedOutputs)> {
        self.graph.add_associations(associations)?;
        let paths = ReportPaths::from_settings(&self.settings);
        let outputs = report::render(associations, &paths)?;
        let analysis = self.graph.analysis();
        report::write_analysis(&analysis, &paths.analysis_txt)?;
        Ok((analysis, outputs))
    }

    pub fn graph(&self) -> &AssociationGraph {
        &self.graph
    }

    pub fn run(&mut self) -> Result<RunOutcome> {
        let rows = self.process_documents()?;
        if rows.is_empty() {
            return Ok(RunOutcome::NoDocuments);
        }
        let associations = self.extract_associations(&rows)?;
        if associations.is_empty() {
            warn!(sentences = rows.len(), "no associations found");
            return Ok(RunOutcome::NoAssociations {
                sentences: rows.len(),
            });
        }
        let (analysis, outputs) = self.generate_outputs(&associations)?;
        info!(?analysis, "processing completed successfully");
        Ok(RunOutcome::Completed {
            sentences: rows.len(),
            associations: associations.len(),
            analysis,
            outputs,
        })
    }
}
