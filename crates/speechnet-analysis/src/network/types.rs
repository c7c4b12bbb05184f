//! petgraph wrapper with character nodes and utterance-count edges.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use speechnet_core::types::collections::FxHashMap;

/// The speech network: characters as nodes, speaker → addressee arcs
/// weighted by the number of attesting records.
#[derive(Debug, Clone, Default)]
pub struct SpeechGraph {
    /// The underlying petgraph graph. Node weights are character identifiers.
    pub graph: DiGraph<String, u32>,
    /// Map from character identifier → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
}

impl SpeechGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `character`.
    pub fn ensure_node(&mut self, character: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(character) {
            return idx;
        }
        let idx = self.graph.add_node(character.to_string());
        self.node_index.insert(character.to_string(), idx);
        idx
    }

    /// Set the weight of the speaker → addressee arc, creating nodes and
    /// arc as needed. An existing arc's weight is replaced, not summed.
    pub fn set_edge(&mut self, speaker: &str, addressee: &str, weight: u32) {
        let from = self.ensure_node(speaker);
        let to = self.ensure_node(addressee);
        self.graph.update_edge(from, to, weight);
    }

    pub fn get_node(&self, character: &str) -> Option<NodeIndex> {
        self.node_index.get(character).copied()
    }

    /// Weight of the speaker → addressee arc, if present.
    pub fn weight(&self, speaker: &str, addressee: &str) -> Option<u32> {
        let from = self.get_node(speaker)?;
        let to = self.get_node(addressee)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Character identifier stored at `idx`.
    pub fn character(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Character identifiers in node insertion order.
    pub fn characters(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Arcs as (speaker index, addressee index, weight).
    pub fn arcs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, u32)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
