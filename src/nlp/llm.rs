//! Language-model recognizer backed by an Ollama-compatible endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::Accelerator,
    error::RecognizerError,
    nlp::{EntityMentions, EntityRecognizer},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Prompts a generative model for gene and disease mentions as JSON.
pub struct LlmRecognizer {
    base_url: String,
    model: String,
    accelerator: Accelerator,
    client: Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_gpu: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl LlmRecognizer {
    pub fn new(
        base_url: String,
        model: String,
        accelerator: Accelerator,
    ) -> Result<Self, RecognizerError> {
        let client = Client::builder()
            .user_agent("gene-miner/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            accelerator,
            client,
        })
    }

    fn options(&self) -> Option<GenerateOptions> {
        match self.accelerator {
            Accelerator::Cpu => Some(GenerateOptions { num_gpu: 0 }),
            // offload every layer the server can fit
            Accelerator::Gpu => Some(GenerateOptions { num_gpu: 999 }),
            Accelerator::None => None,
        }
    }
}

/// Prompt asking the model for a strict JSON object.
pub fn build_prompt(sentence: &str) -> String {
    format!(
        r#"You are a biomedical named entity recognizer.
List every gene (or gene product) and every disease mentioned in the sentence below.
Respond with JSON only, exactly in this shape:
{{"genes": ["<gene>", ...], "diseases": ["<disease>", ...]}}
Use empty arrays when nothing is found. Repeat a name once per mention.

Sentence: {sentence}"#
    )
}

impl EntityRecognizer for LlmRecognizer {
    fn identify_entities(&self, sentence: &str) -> Result<EntityMentions, RecognizerError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: build_prompt(sentence),
            stream: false,
            format: "json",
            options: self.options(),
        };
        let url = format!("{}/api/generate", self.base_url);
        let response: GenerateResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        debug!(raw = %response.response, "model output");
        let value: Value = serde_json::from_str(&response.response).map_err(|e| {
            RecognizerError::InvalidOutput(format!("model reply is not json: {e}"))
        })?;
        EntityMentions::from_json(&value)
    }
}
