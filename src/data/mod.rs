//! Document ingestion and preprocessing layer.

pub mod documents;
pub mod preprocess;
pub mod pubmed;
