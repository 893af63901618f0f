//! Sentence-level cross product of gene and disease mentions.

use std::sync::Arc;

use clap::ValueEnum;
use tracing::{debug, info, warn};

use crate::{
    error::{MiningError, RecognizerError, Result},
    mining::association::{Association, ConfidenceScorer, ConstantConfidence},
    nlp::EntityRecognizer,
};

/// What to do when the recognizer fails on a sentence.
///
/// Malformed recognizer output is always fatal, whatever the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RecognizerFailurePolicy {
    /// Abort the whole run with the recognizer's error.
    #[default]
    Abort,
    /// Log a warning and continue with the next sentence.
    Skip,
}

/// Turns sentences into association records.
pub struct AssociationExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
    scorer: Box<dyn ConfidenceScorer + Send + Sync>,
    policy: RecognizerFailurePolicy,
}

impl AssociationExtractor {
    /// Extractor with the constant placeholder confidence and the abort policy.
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            recognizer,
            scorer: Box::new(ConstantConfidence::default()),
            policy: RecognizerFailurePolicy::default(),
        }
    }

    pub fn with_scorer(mut self, scorer: impl ConfidenceScorer + Send + Sync + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn with_failure_policy(mut self, policy: RecognizerFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract associations from `sentences`.
    ///
    /// Output preserves sentence order and, within a sentence, iterates genes
    /// in the outer loop and diseases in the inner loop. The recognizer is
    /// called exactly once per sentence.
    pub fn extract_associations<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<Association>> {
        let mut associations = Vec::new();
        let mut skipped = 0usize;

        for (index, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            let mentions = match self.recognizer.identify_entities(sentence) {
                Ok(mentions) => mentions,
                Err(RecognizerError::InvalidOutput(reason)) => {
                    return Err(MiningError::InvalidRecognizerOutput { index, reason });
                }
                Err(source) => match self.policy {
                    RecognizerFailurePolicy::Abort => {
                        return Err(MiningError::Recognizer { index, source });
                    }
                    RecognizerFailurePolicy::Skip => {
                        warn!(index, error = %source, "recognizer failed; skipping sentence");
                        skipped += 1;
                        continue;
                    }
                },
            };
            mentions
                .validate()
                .map_err(|reason| MiningError::InvalidRecognizerOutput { index, reason })?;

            debug!(
                index,
                genes = mentions.genes.len(),
                diseases = mentions.diseases.len(),
                "recognized entities"
            );
            associations.reserve(mentions.pair_count());
            for gene in &mentions.genes {
                for disease in &mentions.diseases {
                    let confidence = self.scorer.score(sentence, gene, disease);
                    associations.push(Association::new(
                        gene.as_str(),
                        disease.as_str(),
                        sentence,
                        confidence,
                    )?);
                }
            }
        }

        info!(
            sentences = sentences.len(),
            associations = associations.len(),
            skipped,
            "extracted associations"
        );
        Ok(associations)
    }
}
