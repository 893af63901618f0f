//! Entity recognition layer feeding the association extractor.

pub mod llm;
pub mod ner;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::{config::Settings, error::RecognizerError};

/// Gene and disease mentions found in one sentence, in order of appearance.
///
/// Duplicates are kept: each mention takes part in the cross product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityMentions {
    pub genes: Vec<String>,
    pub diseases: Vec<String>,
}

impl EntityMentions {
    pub fn new(genes: Vec<String>, diseases: Vec<String>) -> Self {
        Self { genes, diseases }
    }

    /// Strictly parse raw recognizer output of the form
    /// `{"genes": [..], "diseases": [..]}`.
    pub fn from_json(value: &Value) -> Result<Self, RecognizerError> {
        let object = value.as_object().ok_or_else(|| {
            RecognizerError::InvalidOutput(format!("expected a json object, got `{value}`"))
        })?;
        let mentions = Self {
            genes: string_list(object.get("genes"), "genes")?,
            diseases: string_list(object.get("diseases"), "diseases")?,
        };
        mentions
            .validate()
            .map_err(RecognizerError::InvalidOutput)?;
        Ok(mentions)
    }

    /// Reject blank entity names, which would produce invalid associations.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(pos) = self.genes.iter().position(|g| g.trim().is_empty()) {
            return Err(format!("gene at position {pos} is blank"));
        }
        if let Some(pos) = self.diseases.iter().position(|d| d.trim().is_empty()) {
            return Err(format!("disease at position {pos} is blank"));
        }
        Ok(())
    }

    /// Number of associations this sentence will contribute.
    pub fn pair_count(&self) -> usize {
        self.genes.len() * self.diseases.len()
    }
}

fn string_list(value: Option<&Value>, key: &str) -> Result<Vec<String>, RecognizerError> {
    let items = value
        .ok_or_else(|| RecognizerError::InvalidOutput(format!("missing `{key}`")))?
        .as_array()
        .ok_or_else(|| RecognizerError::InvalidOutput(format!("`{key}` is not an array")))?;
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                RecognizerError::InvalidOutput(format!("`{key}[{idx}]` is not a string: {item}"))
            })
        })
        .collect()
}

/// Capability extracting gene and disease mentions from a sentence.
///
/// Implementations must not return `null`-like output: an empty
/// [`EntityMentions`] means nothing was found.
pub trait EntityRecognizer: Send + Sync {
    fn identify_entities(&self, sentence: &str) -> Result<EntityMentions, RecognizerError>;
}

/// Recognizer backend selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecognizerKind {
    /// Lexicon lookup over whole tokens.
    Dictionary,
    /// Prompted language model served over HTTP.
    Llm,
}

/// Build the configured recognizer.
pub fn load_recognizer(settings: &Settings, kind: RecognizerKind) -> Result<Arc<dyn EntityRecognizer>> {
    let recognizer: Arc<dyn EntityRecognizer> = match kind {
        RecognizerKind::Dictionary => match &settings.lexicon_path {
            Some(path) => Arc::new(
                ner::DictionaryRecognizer::from_path(path)
                    .with_context(|| format!("loading lexicon {}", path.display()))?,
            ),
            None => Arc::new(ner::DictionaryRecognizer::builtin()),
        },
        RecognizerKind::Llm => Arc::new(llm::LlmRecognizer::new(
            settings.llm_base_url.clone(),
            settings.llm_model.clone(),
            settings.accelerator,
        )?),
    };
    info!(?kind, accelerator = ?settings.accelerator, "loaded entity recognizer");
    Ok(recognizer)
}
