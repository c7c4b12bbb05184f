//! Degree counts, plain and weighted.

use crate::network::SpeechGraph;

/// Degree counts for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeCounts {
    pub indegree: u32,
    pub outdegree: u32,
    pub weighted_indegree: u64,
    pub weighted_outdegree: u64,
}

impl DegreeCounts {
    /// Total degree. A self-loop counts once in each direction.
    pub fn degree(&self) -> u32 {
        self.indegree + self.outdegree
    }
}

/// Degree counts for every node, indexed by `NodeIndex::index()`.
pub fn degree_counts(graph: &SpeechGraph) -> Vec<DegreeCounts> {
    let mut counts = vec![DegreeCounts::default(); graph.node_count()];
    for (from, to, weight) in graph.arcs() {
        let out = &mut counts[from.index()];
        out.outdegree += 1;
        out.weighted_outdegree += u64::from(weight);

        let inc = &mut counts[to.index()];
        inc.indegree += 1;
        inc.weighted_indegree += u64::from(weight);
    }
    counts
}
