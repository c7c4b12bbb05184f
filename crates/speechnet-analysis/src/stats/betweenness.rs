//! Brandes betweenness centrality over ordered (source, target) pairs.
//!
//! The unweighted variant counts hops (BFS). The weighted variant runs
//! Dijkstra with the arc weight used directly as path length, so heavily
//! used arcs are "longer". Scores are normalized by `1 / ((n-1)(n-2))`
//! for graphs with more than two nodes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::engine::Centrality;
use crate::network::SpeechGraph;

/// Betweenness centrality as a pluggable [`Centrality`].
#[derive(Debug, Clone, Copy)]
pub struct Betweenness {
    pub normalized: bool,
}

impl Default for Betweenness {
    fn default() -> Self {
        Self { normalized: true }
    }
}

impl Centrality for Betweenness {
    fn name(&self) -> &'static str {
        "betweenness"
    }

    fn compute(&self, graph: &SpeechGraph, weighted: bool) -> Vec<f64> {
        betweenness_centrality(graph, weighted, self.normalized)
    }
}

/// Betweenness for every node, indexed by `NodeIndex::index()`.
pub fn betweenness_centrality(graph: &SpeechGraph, weighted: bool, normalized: bool) -> Vec<f64> {
    let n = graph.node_count();
    let adjacency = adjacency(graph, weighted);
    let mut centrality = vec![0.0f64; n];

    for source in 0..n {
        let paths = if weighted {
            dijkstra_paths(&adjacency, source)
        } else {
            bfs_paths(&adjacency, source)
        };
        accumulate(&paths, source, &mut centrality);
    }

    if normalized && n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for value in &mut centrality {
            *value *= scale;
        }
    }
    centrality
}

/// Outgoing (target, length) lists per node.
fn adjacency(graph: &SpeechGraph, weighted: bool) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); graph.node_count()];
    for (from, to, weight) in graph.arcs() {
        let length = if weighted { f64::from(weight) } else { 1.0 };
        adjacency[from.index()].push((to.index(), length));
    }
    adjacency
}

/// Single-source shortest-path DAG.
struct ShortestPaths {
    /// Nodes in non-decreasing distance from the source.
    order: Vec<usize>,
    predecessors: Vec<Vec<usize>>,
    /// Number of shortest paths from the source.
    sigma: Vec<f64>,
}

impl ShortestPaths {
    fn new(n: usize, source: usize) -> Self {
        let mut sigma = vec![0.0; n];
        sigma[source] = 1.0;
        Self {
            order: Vec::with_capacity(n),
            predecessors: vec![Vec::new(); n],
            sigma,
        }
    }
}

fn bfs_paths(adjacency: &[Vec<(usize, f64)>], source: usize) -> ShortestPaths {
    let mut paths = ShortestPaths::new(adjacency.len(), source);
    let mut hops = vec![usize::MAX; adjacency.len()];
    hops[source] = 0;

    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        paths.order.push(v);
        for &(w, _) in &adjacency[v] {
            if hops[w] == usize::MAX {
                hops[w] = hops[v] + 1;
                queue.push_back(w);
            }
            if hops[w] == hops[v] + 1 {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push(v);
            }
        }
    }
    paths
}

fn dijkstra_paths(adjacency: &[Vec<(usize, f64)>], source: usize) -> ShortestPaths {
    let n = adjacency.len();
    let mut paths = ShortestPaths::new(n, source);
    let mut dist = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(DijkstraState { cost: 0.0, node: source });

    while let Some(DijkstraState { cost, node: v }) = heap.pop() {
        if settled[v] || cost > dist[v] {
            continue;
        }
        settled[v] = true;
        paths.order.push(v);

        for &(w, length) in &adjacency[v] {
            if settled[w] {
                continue;
            }
            let next_cost = cost + length;
            if next_cost < dist[w] {
                dist[w] = next_cost;
                paths.sigma[w] = paths.sigma[v];
                paths.predecessors[w].clear();
                paths.predecessors[w].push(v);
                heap.push(DijkstraState { cost: next_cost, node: w });
            } else if next_cost == dist[w] {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push(v);
            }
        }
    }
    paths
}

/// Back-propagate pair dependencies from one source.
fn accumulate(paths: &ShortestPaths, source: usize, centrality: &mut [f64]) {
    let mut delta = vec![0.0f64; centrality.len()];
    for &w in paths.order.iter().rev() {
        for &v in &paths.predecessors[w] {
            delta[v] += paths.sigma[v] / paths.sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            centrality[w] += delta[w];
        }
    }
}

/// State for Dijkstra's priority queue.
#[derive(Debug, Clone, Copy)]
struct DijkstraState {
    cost: f64,
    node: usize,
}

impl PartialEq for DijkstraState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}
