//! Typed failures surfaced by the mining core.

use thiserror::Error;

use crate::mining::EntityKind;

/// Failure raised by an [`EntityRecognizer`](crate::nlp::EntityRecognizer).
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid entity recognizer output: {0}")]
    InvalidOutput(String),

    #[error("lexicon io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure raised by extraction or graph accumulation.
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("entity recognizer failed on sentence {index}: {source}")]
    Recognizer {
        index: usize,
        #[source]
        source: RecognizerError,
    },

    #[error("invalid entity recognizer output for sentence {index}: {reason}")]
    InvalidRecognizerOutput { index: usize, reason: String },

    #[error("confidence {value} for ({gene}, {disease}) is outside [0, 1]")]
    ConfidenceOutOfRange {
        gene: String,
        disease: String,
        value: f64,
    },

    #[error("node `{name}` is already tagged {existing}, cannot add it as {attempted}")]
    NodeTypeConflict {
        name: String,
        existing: EntityKind,
        attempted: EntityKind,
    },

    #[error("`{name}` is both the gene and the disease of one association")]
    SelfAssociation { name: String },
}

pub type Result<T> = std::result::Result<T, MiningError>;
