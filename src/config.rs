//! Runtime configuration utilities for gene-miner.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{anyhow, Context};

/// Model device preference handed to the recognizer backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accelerator {
    Cpu,
    Gpu,
    /// Leave the choice to the model server.
    #[default]
    None,
}

impl FromStr for Accelerator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "gpu" | "cuda" | "mps" => Ok(Self::Gpu),
            "" | "none" | "auto" => Ok(Self::None),
            other => Err(anyhow!("unknown accelerator `{other}` (expected cpu, gpu or none)")),
        }
    }
}

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the input `*.txt` documents.
    pub raw_dir: PathBuf,
    /// Destination of `processed_documents.csv`.
    pub processed_dir: PathBuf,
    /// Destination of the network diagram.
    pub generated_dir: PathBuf,
    /// Destination of the CSV report and network analysis.
    pub reports_dir: PathBuf,
    /// Folder receiving per-run log files.
    pub log_dir: PathBuf,
    pub accelerator: Accelerator,
    /// Base URL of the Ollama-compatible model server.
    pub llm_base_url: String,
    pub llm_model: String,
    /// Optional JSON lexicon replacing the built-in dictionary.
    pub lexicon_path: Option<PathBuf>,
    /// Contact email for PubMed E-utilities courtesy policy.
    pub pubmed_email: String,
    /// Tool name sent with PubMed requests.
    pub pubmed_tool: String,
    pub max_pubmed_results: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = path_var("DATA_DIR").unwrap_or_else(|| PathBuf::from("./data"));
        let raw_dir = path_var("RAW_DATA_DIR").unwrap_or_else(|| data_dir.join("raw"));
        let processed_dir =
            path_var("PROCESSED_DATA_DIR").unwrap_or_else(|| data_dir.join("processed"));
        let generated_dir =
            path_var("GENERATED_DATA_DIR").unwrap_or_else(|| data_dir.join("generated"));
        let reports_dir = path_var("REPORTS_DIR").unwrap_or_else(|| PathBuf::from("./reports"));
        let log_dir = path_var("LOG_DIR").unwrap_or_else(|| PathBuf::from("./logs"));
        let accelerator = env::var("ACCELERATOR")
            .ok()
            .map(|v| v.parse::<Accelerator>())
            .transpose()
            .context("parsing ACCELERATOR")?
            .unwrap_or_default();
        let llm_base_url =
            env::var("LLM_BASE_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());
        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| "biomistral".to_string());
        let pubmed_email =
            env::var("PUBMED_EMAIL").unwrap_or_else(|_| "research@example.com".to_string());
        let pubmed_tool = env::var("PUBMED_TOOL").unwrap_or_else(|_| "gene_miner".to_string());
        let max_pubmed_results = env::var("MAX_PUBMED_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        for dir in [&processed_dir, &generated_dir, &reports_dir, &log_dir] {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }

        Ok(Self {
            raw_dir,
            processed_dir,
            generated_dir,
            reports_dir,
            log_dir,
            accelerator,
            llm_base_url,
            llm_model,
            lexicon_path: path_var("LEXICON_PATH"),
            pubmed_email,
            pubmed_tool,
            max_pubmed_results,
        })
    }

    pub fn join_processed<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.processed_dir.join(path)
    }

    pub fn join_generated<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.generated_dir.join(path)
    }

    pub fn join_report<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.reports_dir.join(path)
    }
}

fn path_var(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerator_parsing() {
        assert_eq!("CPU".parse::<Accelerator>().unwrap(), Accelerator::Cpu);
        assert_eq!("mps".parse::<Accelerator>().unwrap(), Accelerator::Gpu);
        assert_eq!("none".parse::<Accelerator>().unwrap(), Accelerator::None);
        assert!("tpu".parse::<Accelerator>().is_err());
    }
}
