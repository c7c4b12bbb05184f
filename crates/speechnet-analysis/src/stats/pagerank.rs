//! PageRank by power iteration.
//!
//! Uniform teleport, dangling nodes redistribute their mass uniformly.
//! Converged when the L1 change between iterates drops below
//! `n * tolerance`.

use tracing::warn;

use super::engine::Centrality;
use crate::network::SpeechGraph;

/// Power-iteration settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// PageRank as a pluggable [`Centrality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRank {
    pub params: PageRankParams,
}

impl PageRank {
    pub fn new(params: PageRankParams) -> Self {
        Self { params }
    }
}

impl Centrality for PageRank {
    fn name(&self) -> &'static str {
        "pagerank"
    }

    fn compute(&self, graph: &SpeechGraph, weighted: bool) -> Vec<f64> {
        page_rank(graph, weighted, &self.params)
    }
}

/// PageRank for every node, indexed by `NodeIndex::index()`.
///
/// Unweighted treats every arc as weight 1; weighted splits a node's
/// rank across its arcs in proportion to arc weight.
pub fn page_rank(graph: &SpeechGraph, weighted: bool, params: &PageRankParams) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let arcs: Vec<(usize, usize, f64)> = graph
        .arcs()
        .map(|(from, to, weight)| {
            let w = if weighted { f64::from(weight) } else { 1.0 };
            (from.index(), to.index(), w)
        })
        .collect();

    let mut out_weight = vec![0.0f64; n];
    for &(from, _, w) in &arcs {
        out_weight[from] += w;
    }
    let dangling: Vec<usize> = (0..n).filter(|&i| out_weight[i] == 0.0).collect();

    let uniform = 1.0 / n as f64;
    let alpha = params.damping;
    let mut rank = vec![uniform; n];

    for _ in 0..params.max_iterations {
        let last = rank;
        rank = vec![0.0f64; n];

        for &(from, to, w) in &arcs {
            rank[to] += alpha * last[from] * w / out_weight[from];
        }
        let dangling_mass: f64 = alpha * dangling.iter().map(|&i| last[i]).sum::<f64>();
        let base = dangling_mass * uniform + (1.0 - alpha) * uniform;
        for value in &mut rank {
            *value += base;
        }

        let change: f64 = rank.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * params.tolerance {
            return rank;
        }
    }

    warn!(
        nodes = n,
        max_iterations = params.max_iterations,
        weighted,
        "pagerank did not converge; returning last iterate"
    );
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(arcs: &[(&str, &str, u32)]) -> SpeechGraph {
        let mut graph = SpeechGraph::new();
        for &(a, b, w) in arcs {
            graph.set_edge(a, b, w);
        }
        graph
    }

    #[test]
    fn ranks_sum_to_one() {
        let g = graph(&[("a", "b", 2), ("b", "c", 1), ("c", "a", 4), ("d", "a", 1)]);
        for weighted in [false, true] {
            let pr = page_rank(&g, weighted, &PageRankParams::default());
            let total: f64 = pr.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
        }
    }

    #[test]
    fn symmetric_pair_ranks_equally() {
        let g = graph(&[("a", "b", 1), ("b", "a", 1)]);
        let pr = page_rank(&g, false, &PageRankParams::default());
        assert!((pr[0] - 0.5).abs() < 1e-9);
        assert!((pr[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn weight_shifts_rank() {
        // a talks to b far more than to c.
        let g = graph(&[("a", "b", 9), ("a", "c", 1)]);
        let weighted = page_rank(&g, true, &PageRankParams::default());
        let unweighted = page_rank(&g, false, &PageRankParams::default());
        let (b, c) = (1, 2);
        assert!(weighted[b] > weighted[c]);
        assert!((unweighted[b] - unweighted[c]).abs() < 1e-12);
    }

    #[test]
    fn dangling_nodes_keep_mass() {
        let g = graph(&[("a", "b", 1)]);
        let pr = page_rank(&g, false, &PageRankParams::default());
        assert!((pr.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(pr[1] > pr[0]);
    }

    #[test]
    fn empty_graph_is_empty() {
        assert!(page_rank(&SpeechGraph::new(), true, &PageRankParams::default()).is_empty());
    }
}
