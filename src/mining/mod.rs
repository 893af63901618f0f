//! Association extraction and network analysis core.

pub mod association;
pub mod extractor;
pub mod graph;

pub use association::{
    Association, ConfidenceScorer, ConstantConfidence, EntityKind, DEFAULT_CONFIDENCE,
};
pub use extractor::{AssociationExtractor, RecognizerFailurePolicy};
pub use graph::{AssociationGraph, CollisionPolicy, NetworkAnalysis};
