//! Gene-disease association mining from biomedical literature.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod mining;
pub mod nlp;
pub mod pipeline;
pub mod report;
