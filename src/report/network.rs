//! Self-contained HTML/SVG rendering of the association network.

use anyhow::Result;
use askama::Template;
use indexmap::{IndexMap, IndexSet};

use crate::mining::Association;

pub const DEFAULT_FIGURE_WIDTH: u32 = 1200;
pub const DEFAULT_FIGURE_HEIGHT: u32 = 800;
pub const GENE_NODE_COLOR: &str = "#1f77b4";
pub const DISEASE_NODE_COLOR: &str = "#d62728";

const COLUMN_MARGIN: u32 = 220;
const ROW_SPACING: u32 = 36;
const MAX_LINK_WIDTH: f64 = 12.0;
const MAX_TOOLTIP_SENTENCES: usize = 5;

struct NodeView {
    label: String,
    x: u32,
    y: u32,
    color: &'static str,
    anchor: &'static str,
    label_dx: i32,
}

struct LinkView {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    width: String,
    title: String,
}

#[derive(Template)]
#[template(path = "network.html")]
struct NetworkPage {
    title: &'static str,
    width: u32,
    height: u32,
    gene_color: &'static str,
    disease_color: &'static str,
    nodes: Vec<NodeView>,
    links: Vec<LinkView>,
}

#[derive(Default)]
struct PairSummary {
    mentions: usize,
    confidence: f64,
    sentences: Vec<String>,
}

/// Render a bipartite gene/disease network, or `None` when there is nothing to draw.
///
/// Parallel associations collapse into one link whose width grows with the
/// summed confidence; hovering a link lists its supporting sentences.
pub fn render_network(associations: &[Association]) -> Result<Option<String>> {
    if associations.is_empty() {
        return Ok(None);
    }

    let mut genes = IndexSet::new();
    let mut diseases = IndexSet::new();
    let mut pairs: IndexMap<(&str, &str), PairSummary> = IndexMap::new();
    for association in associations {
        genes.insert(association.gene());
        diseases.insert(association.disease());
        let pair = pairs
            .entry((association.gene(), association.disease()))
            .or_default();
        pair.mentions += 1;
        pair.confidence += association.confidence();
        if pair.sentences.len() < MAX_TOOLTIP_SENTENCES {
            pair.sentences.push(association.sentence().to_string());
        }
    }

    let rows = genes.len().max(diseases.len()) as u32;
    let width = DEFAULT_FIGURE_WIDTH;
    let height = DEFAULT_FIGURE_HEIGHT.max(ROW_SPACING * (rows + 2));
    let gene_x = COLUMN_MARGIN;
    let disease_x = width - COLUMN_MARGIN;
    let y_of = |idx: usize, count: usize| {
        (u64::from(height) * (idx as u64 + 1) / (count as u64 + 1)) as u32
    };

    let mut nodes = Vec::with_capacity(genes.len() + diseases.len());
    for (idx, gene) in genes.iter().enumerate() {
        nodes.push(NodeView {
            label: gene.to_string(),
            x: gene_x,
            y: y_of(idx, genes.len()),
            color: GENE_NODE_COLOR,
            anchor: "end",
            label_dx: -12,
        });
    }
    for (idx, disease) in diseases.iter().enumerate() {
        nodes.push(NodeView {
            label: disease.to_string(),
            x: disease_x,
            y: y_of(idx, diseases.len()),
            color: DISEASE_NODE_COLOR,
            anchor: "start",
            label_dx: 12,
        });
    }

    let links = pairs
        .iter()
        .map(|((gene, disease), summary)| {
            let gene_idx = genes.get_index_of(gene).unwrap_or_default();
            let disease_idx = diseases.get_index_of(disease).unwrap_or_default();
            let mut title = format!(
                "{gene} - {disease}: {} mention(s), total confidence {:.2}",
                summary.mentions, summary.confidence
            );
            for sentence in &summary.sentences {
                title.push_str("\n\u{2022} ");
                title.push_str(sentence);
            }
            LinkView {
                x1: gene_x,
                y1: y_of(gene_idx, genes.len()),
                x2: disease_x,
                y2: y_of(disease_idx, diseases.len()),
                width: format!("{:.2}", (1.0 + 2.0 * summary.confidence).min(MAX_LINK_WIDTH)),
                title,
            }
        })
        .collect();

    let page = NetworkPage {
        title: "Gene-Disease Association Network",
        width,
        height,
        gene_color: GENE_NODE_COLOR,
        disease_color: DISEASE_NODE_COLOR,
        nodes,
        links,
    };
    Ok(Some(page.render()?))
}
