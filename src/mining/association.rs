//! Association records and confidence scoring strategies.

use std::fmt;

use serde::Serialize;

use crate::error::{MiningError, Result};

/// Role an entity plays in an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Gene,
    Disease,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gene => f.write_str("gene"),
            Self::Disease => f.write_str("disease"),
        }
    }
}

/// One observed gene/disease co-occurrence within a sentence.
///
/// Fields are private so every record goes through [`Association::new`],
/// which rejects blank entities and confidences outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    gene: String,
    disease: String,
    sentence: String,
    confidence: f64,
}

impl Association {
    pub fn new(
        gene: impl Into<String>,
        disease: impl Into<String>,
        sentence: impl Into<String>,
        confidence: f64,
    ) -> Result<Self> {
        let gene = gene.into();
        let disease = disease.into();
        if gene.trim().is_empty() {
            return Err(MiningError::InvalidInput(format!(
                "association gene is empty (disease `{disease}`)"
            )));
        }
        if disease.trim().is_empty() {
            return Err(MiningError::InvalidInput(format!(
                "association disease is empty (gene `{gene}`)"
            )));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(MiningError::ConfidenceOutOfRange {
                gene,
                disease,
                value: confidence,
            });
        }
        Ok(Self {
            gene,
            disease,
            sentence: sentence.into(),
            confidence,
        })
    }

    pub fn gene(&self) -> &str {
        &self.gene
    }

    pub fn disease(&self) -> &str {
        &self.disease
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Pluggable scoring strategy for a (sentence, gene, disease) triple.
///
/// Implementations should return a value in `[0, 1]`; the extractor rejects
/// anything else.
pub trait ConfidenceScorer {
    fn score(&self, sentence: &str, gene: &str, disease: &str) -> f64;
}

impl<F> ConfidenceScorer for F
where
    F: Fn(&str, &str, &str) -> f64,
{
    fn score(&self, sentence: &str, gene: &str, disease: &str) -> f64 {
        self(sentence, gene, disease)
    }
}

/// Placeholder scorer returning the same value for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantConfidence(pub f64);

/// Placeholder confidence carried over until a real scoring model exists.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

impl Default for ConstantConfidence {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE)
    }
}

impl ConfidenceScorer for ConstantConfidence {
    fn score(&self, _sentence: &str, _gene: &str, _disease: &str) -> f64 {
        self.0
    }
}
