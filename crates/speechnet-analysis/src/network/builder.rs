//! Graph construction from aggregated edges.

use tracing::debug;

use super::types::SpeechGraph;
use crate::edges::Edge;

/// Build the speech graph with one arc per edge.
///
/// Should the same ordered pair appear twice, the later weight replaces
/// the earlier one. The aggregator never emits duplicates, so this only
/// matters for hand-assembled edge lists.
pub fn build_network(edges: &[Edge]) -> SpeechGraph {
    let mut graph = SpeechGraph::new();
    for edge in edges {
        graph.set_edge(&edge.speaker, &edge.addressee, edge.weight);
    }
    debug!(
        nodes = graph.node_count(),
        arcs = graph.edge_count(),
        "built speech graph"
    );
    graph
}
