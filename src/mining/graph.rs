//! Gene/disease association multigraph and its summary statistics.

use clap::ValueEnum;
use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use tracing::warn;

use crate::{
    error::{MiningError, Result},
    mining::association::{Association, EntityKind},
};

/// A graph node: an entity name with its role stored at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityNode {
    pub kind: EntityKind,
    pub name: String,
}

/// One co-occurrence; parallel edges between the same pair are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationEdge {
    pub confidence: f64,
    pub sentence: String,
}

/// How to treat a name that shows up both as a gene and as a disease.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicy {
    /// Keep one node per role and record the name as a type conflict.
    #[default]
    Separate,
    /// Fail the offending record with [`MiningError::NodeTypeConflict`], or
    /// [`MiningError::SelfAssociation`] when gene and disease share a name.
    Reject,
}

/// Summary counts over the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkAnalysis {
    pub total_associations: usize,
    pub unique_genes: usize,
    pub unique_diseases: usize,
    pub type_conflicts: usize,
}

impl NetworkAnalysis {
    /// Stat name/value pairs in report order.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("total_associations", self.total_associations),
            ("unique_genes", self.unique_genes),
            ("unique_diseases", self.unique_diseases),
            ("type_conflicts", self.type_conflicts),
        ]
    }
}

/// Undirected multigraph accumulating associations across calls.
#[derive(Debug, Default)]
pub struct AssociationGraph {
    inner: UnGraph<EntityNode, AssociationEdge>,
    index: IndexMap<(EntityKind, String), NodeIndex>,
    conflicts: IndexSet<String>,
    policy: CollisionPolicy,
}

impl AssociationGraph {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Access the underlying petgraph graph.
    pub fn inner(&self) -> &UnGraph<EntityNode, AssociationEdge> {
        &self.inner
    }

    /// Add one edge per record, creating tagged nodes as needed.
    ///
    /// Under [`CollisionPolicy::Reject`] records are added up to the first
    /// conflicting one, which leaves the graph untouched and is returned as
    /// an error.
    pub fn add_associations(&mut self, records: &[Association]) -> Result<()> {
        for record in records {
            self.add_association(record)?;
        }
        Ok(())
    }

    pub fn add_association(&mut self, record: &Association) -> Result<()> {
        let gene = record.gene();
        let disease = record.disease();
        let self_pair = gene == disease;
        let gene_clash = self_pair || self.contains(EntityKind::Disease, gene);
        let disease_clash = self_pair || self.contains(EntityKind::Gene, disease);

        if self.policy == CollisionPolicy::Reject {
            if self_pair {
                return Err(MiningError::SelfAssociation {
                    name: gene.to_string(),
                });
            }
            if gene_clash {
                return Err(MiningError::NodeTypeConflict {
                    name: gene.to_string(),
                    existing: EntityKind::Disease,
                    attempted: EntityKind::Gene,
                });
            }
            if disease_clash {
                return Err(MiningError::NodeTypeConflict {
                    name: disease.to_string(),
                    existing: EntityKind::Gene,
                    attempted: EntityKind::Disease,
                });
            }
        }
        if gene_clash {
            self.record_conflict(gene);
        }
        if disease_clash {
            self.record_conflict(disease);
        }

        let source = self.ensure_node(EntityKind::Gene, gene);
        let target = self.ensure_node(EntityKind::Disease, disease);
        self.inner.add_edge(
            source,
            target,
            AssociationEdge {
                confidence: record.confidence(),
                sentence: record.sentence().to_string(),
            },
        );
        Ok(())
    }

    /// Whether a node with this role and name exists.
    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.index.contains_key(&(kind, name.to_string()))
    }

    /// Number of parallel edges between a gene and a disease.
    pub fn edge_count_between(&self, gene: &str, disease: &str) -> usize {
        let (Some(&a), Some(&b)) = (
            self.index.get(&(EntityKind::Gene, gene.to_string())),
            self.index.get(&(EntityKind::Disease, disease.to_string())),
        ) else {
            return 0;
        };
        self.inner.edges_connecting(a, b).count()
    }

    /// Names seen both as a gene and as a disease, in discovery order.
    pub fn type_conflicts(&self) -> impl Iterator<Item = &str> {
        self.conflicts.iter().map(String::as_str)
    }

    pub fn analysis(&self) -> NetworkAnalysis {
        let mut analysis = NetworkAnalysis {
            total_associations: self.inner.edge_count(),
            type_conflicts: self.conflicts.len(),
            ..NetworkAnalysis::default()
        };
        for idx in self.inner.node_indices() {
            match self.inner[idx].kind {
                EntityKind::Gene => analysis.unique_genes += 1,
                EntityKind::Disease => analysis.unique_diseases += 1,
            }
        }
        analysis
    }

    /// Drop every node, edge and recorded conflict.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.index.clear();
        self.conflicts.clear();
    }

    fn ensure_node(&mut self, kind: EntityKind, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(&(kind, name.to_string())) {
            return idx;
        }
        let idx = self.inner.add_node(EntityNode {
            kind,
            name: name.to_string(),
        });
        self.index.insert((kind, name.to_string()), idx);
        idx
    }

    fn record_conflict(&mut self, name: &str) {
        if self.conflicts.insert(name.to_string()) {
            warn!(%name, "entity used as both gene and disease; keeping separate nodes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assoc(gene: &str, disease: &str) -> Association {
        Association::new(gene, disease, format!("{gene} and {disease}"), 0.5).unwrap()
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = AssociationGraph::default();
        graph
            .add_associations(&[assoc("BRCA1", "breast cancer"), assoc("BRCA1", "breast cancer")])
            .unwrap();
        assert_eq!(graph.edge_count_between("BRCA1", "breast cancer"), 2);
        assert_eq!(graph.inner().node_count(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut graph = AssociationGraph::default();
        graph.add_associations(&[assoc("X", "X")]).unwrap();
        assert_eq!(graph.analysis().type_conflicts, 1);
        graph.clear();
        assert_eq!(graph.analysis(), NetworkAnalysis::default());
    }
}
