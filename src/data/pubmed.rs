//! PubMed abstract download through NCBI E-utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};
use urlencoding::encode;

use crate::config::Settings;

const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const EFETCH_BATCH: usize = 200;

/// An article reduced to the fields the miner reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Abstract {
    pub pmid: String,
    pub title: String,
    pub text: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
}

impl Abstract {
    /// Plain-text document body: title, blank line, abstract.
    pub fn to_document(&self) -> String {
        if self.text.is_empty() {
            format!("{}\n", self.title)
        } else {
            format!("{}\n\n{}\n", self.title, self.text)
        }
    }
}

/// Thin E-utilities client carrying the courtesy tool/email parameters.
pub struct PubmedClient {
    client: Client,
    tool: String,
    email: String,
}

impl PubmedClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("gene-miner/0.1 (+{})", settings.pubmed_email))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            tool: settings.pubmed_tool.clone(),
            email: settings.pubmed_email.clone(),
        })
    }

    /// Return up to `max` PMIDs matching a free-text query.
    pub async fn search(&self, query: &str, max: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let url = format!(
            "{EUTILS_BASE}/esearch.fcgi?db=pubmed&retmode=json&term={term}&retmax={max}&tool={tool}&email={email}",
            term = encode(query),
            tool = encode(&self.tool),
            email = encode(&self.email),
        );
        let payload: ESearchResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.esearchresult.idlist)
    }

    /// Fetch abstracts for `pmids`, in batches.
    pub async fn fetch(&self, pmids: &[String]) -> Result<Vec<Abstract>> {
        let mut output = Vec::new();
        for batch in pmids.chunks(EFETCH_BATCH) {
            let url = format!(
                "{EUTILS_BASE}/efetch.fcgi?db=pubmed&rettype=abstract&retmode=xml&id={ids}&tool={tool}&email={email}",
                ids = batch.join(","),
                tool = encode(&self.tool),
                email = encode(&self.email),
            );
            let xml = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            output.extend(parse_article_set(&xml)?);
        }
        Ok(output)
    }
}

/// Decode an efetch `PubmedArticleSet` document.
pub fn parse_article_set(xml: &str) -> Result<Vec<Abstract>> {
    let set: PubmedArticleSet = from_str(xml).context("decoding efetch xml")?;
    Ok(set.articles.into_iter().map(PubmedArticle::into_abstract).collect())
}

/// Write each abstract to `<dir>/<pmid>.txt` so `mine` can pick it up.
pub fn persist_abstracts(abstracts: &[Abstract], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::new();
    for article in abstracts {
        if article.text.is_empty() {
            warn!(pmid = %article.pmid, "article has no abstract; keeping title only");
        }
        let path = dir.join(format!("{}.txt", article.pmid));
        std::fs::write(&path, article.to_document())
            .with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    info!(dir = %dir.display(), count = written.len(), "saved pubmed abstracts");
    Ok(written)
}

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Deserialize, Default)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    articles: Vec<PubmedArticle>,
}

#[derive(Debug, Deserialize)]
struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    citation: MedlineCitation,
}

impl PubmedArticle {
    fn into_abstract(self) -> Abstract {
        let MedlineCitation {
            pmid,
            article,
            article_date,
        } = self.citation;
        let text = article
            .abstract_section
            .map(|section| {
                section
                    .paragraphs
                    .into_iter()
                    .filter_map(|p| p.value)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();
        let authors = article
            .author_list
            .map(|list| list.authors.into_iter().filter_map(Author::last_name).collect())
            .unwrap_or_default();
        Abstract {
            pmid: pmid.value,
            title: article.title.value,
            text,
            authors,
            year: article_date
                .and_then(|d| d.year)
                .and_then(|y| y.value.parse().ok()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: TextNode,
    #[serde(rename = "Article")]
    article: Article,
    #[serde(rename = "ArticleDate")]
    article_date: Option<ArticleDate>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(rename = "ArticleTitle")]
    title: TextNode,
    #[serde(rename = "Abstract")]
    abstract_section: Option<AbstractSection>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
struct AbstractSection {
    #[serde(rename = "AbstractText", default)]
    paragraphs: Vec<OptionalText>,
}

#[derive(Debug, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<Author>,
}

#[derive(Debug, Deserialize)]
struct Author {
    #[serde(rename = "LastName")]
    last_name: Option<TextNode>,
}

impl Author {
    fn last_name(self) -> Option<String> {
        self.last_name.map(|n| n.value)
    }
}

#[derive(Debug, Deserialize)]
struct ArticleDate {
    #[serde(rename = "Year")]
    year: Option<TextNode>,
}

#[derive(Debug, Deserialize)]
struct TextNode {
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct OptionalText {
    #[serde(rename = "$text")]
    value: Option<String>,
}
