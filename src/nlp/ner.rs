//! Lexicon-based gene and disease recognizer.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    error::RecognizerError,
    nlp::{EntityMentions, EntityRecognizer},
};

/// A canonical entity name plus the surface forms that map to it.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Gene and disease vocabularies, loadable from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    pub genes: Vec<LexiconEntry>,
    pub diseases: Vec<LexiconEntry>,
}

fn entry(name: &str, aliases: &[&str]) -> LexiconEntry {
    LexiconEntry {
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

static BUILTIN_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    genes: vec![
        entry("BRCA1", &[]),
        entry("BRCA2", &[]),
        entry("TP53", &["p53"]),
        entry("APOE", &["apoe4", "apolipoprotein e"]),
        entry("APP", &["amyloid precursor protein"]),
        entry("PSEN1", &["presenilin 1"]),
        entry("CFTR", &[]),
        entry("HTT", &["huntingtin"]),
        entry("EGFR", &[]),
        entry("KRAS", &[]),
        entry("BRAF", &[]),
        entry("PTEN", &[]),
        entry("SNCA", &["alpha-synuclein"]),
        entry("LRRK2", &[]),
        entry("MLH1", &[]),
        entry("MSH2", &[]),
        entry("HLA-B", &[]),
        entry("FMR1", &[]),
        entry("DMD", &["dystrophin"]),
        entry("HBB", &[]),
        entry("SMN1", &[]),
        entry("ERBB2", &["her2"]),
        entry("RB1", &[]),
        entry("VHL", &[]),
    ],
    diseases: vec![
        entry("breast cancer", &["breast carcinoma"]),
        entry("ovarian cancer", &[]),
        entry("lung cancer", &["non-small cell lung cancer", "nsclc"]),
        entry("colorectal cancer", &["lynch syndrome"]),
        entry("melanoma", &[]),
        entry("retinoblastoma", &[]),
        entry(
            "Alzheimer disease",
            &["alzheimer", "alzheimers", "alzheimer s disease"],
        ),
        entry(
            "Parkinson disease",
            &["parkinson", "parkinsons", "parkinson s disease"],
        ),
        entry(
            "Huntington disease",
            &["huntington", "huntington s disease"],
        ),
        entry("cystic fibrosis", &[]),
        entry("sickle cell anemia", &["sickle cell disease"]),
        entry("fragile X syndrome", &[]),
        entry(
            "Duchenne muscular dystrophy",
            &["duchenne", "muscular dystrophy"],
        ),
        entry("spinal muscular atrophy", &[]),
        entry("von Hippel-Lindau disease", &["von hippel-lindau"]),
        entry("Stevens-Johnson syndrome", &[]),
    ],
});

#[derive(Debug, Clone)]
struct Term {
    tokens: Vec<String>,
    canonical: String,
}

/// Matches lexicon terms over whole, case-insensitive tokens.
///
/// At each position the longest matching term wins, so `breast cancer`
/// is reported once rather than also as `cancer`.
#[derive(Debug, Clone)]
pub struct DictionaryRecognizer {
    genes: Vec<Term>,
    diseases: Vec<Term>,
}

impl DictionaryRecognizer {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            genes: compile(&lexicon.genes),
            diseases: compile(&lexicon.diseases),
        }
    }

    pub fn builtin() -> Self {
        Self::new(&BUILTIN_LEXICON)
    }

    /// Load a JSON lexicon of the form `{"genes": [{"name": .., "aliases": [..]}], "diseases": [..]}`.
    pub fn from_path(path: &Path) -> Result<Self, RecognizerError> {
        let raw = std::fs::read_to_string(path)?;
        let lexicon: Lexicon = serde_json::from_str(&raw)?;
        Ok(Self::new(&lexicon))
    }
}

impl EntityRecognizer for DictionaryRecognizer {
    fn identify_entities(&self, sentence: &str) -> Result<EntityMentions, RecognizerError> {
        let tokens = tokenize(sentence);
        Ok(EntityMentions {
            genes: find_terms(&tokens, &self.genes),
            diseases: find_terms(&tokens, &self.diseases),
        })
    }
}

fn compile(entries: &[LexiconEntry]) -> Vec<Term> {
    let mut terms = Vec::new();
    for entry in entries {
        if entry.name.trim().is_empty() {
            continue;
        }
        for surface in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
            let tokens = tokenize(surface);
            if tokens.is_empty() {
                continue;
            }
            terms.push(Term {
                tokens,
                canonical: entry.name.trim().to_string(),
            });
        }
    }
    terms
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .map(|token| token.trim_matches('-'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn find_terms(tokens: &[String], terms: &[Term]) -> Vec<String> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        let best = terms
            .iter()
            .filter(|term| tokens[pos..].starts_with(&term.tokens))
            .max_by_key(|term| term.tokens.len());
        match best {
            Some(term) => {
                found.push(term.canonical.clone());
                pos += term.tokens.len();
            }
            None => pos += 1,
        }
    }
    found
}
