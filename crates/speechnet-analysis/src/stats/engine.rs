//! Statistics engine: assembles the per-character table from degree
//! counts and pluggable centralities.

use speechnet_core::config::StatsConfig;
use tracing::debug;

use super::betweenness::Betweenness;
use super::degree::degree_counts;
use super::pagerank::{PageRank, PageRankParams};
use super::types::{NodeStats, StatsRow, StatsTable};
use crate::network::SpeechGraph;

/// A node centrality measure with an unweighted and a weighted variant.
///
/// Implementations return one score per node, indexed by
/// `NodeIndex::index()`. Missing or non-finite scores are recorded as 0.
pub trait Centrality: Send + Sync {
    fn name(&self) -> &'static str;

    fn compute(&self, graph: &SpeechGraph, weighted: bool) -> Vec<f64>;
}

/// Computes [`StatsTable`]s. Holds the centralities used for the
/// betweenness and PageRank columns.
pub struct StatsEngine {
    betweenness: Box<dyn Centrality>,
    pagerank: Box<dyn Centrality>,
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self {
            betweenness: Box::new(Betweenness::default()),
            pagerank: Box::new(PageRank::default()),
        }
    }
}

impl std::fmt::Debug for StatsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsEngine")
            .field("betweenness", &self.betweenness.name())
            .field("pagerank", &self.pagerank.name())
            .finish()
    }
}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with PageRank settings taken from configuration.
    pub fn from_config(config: &StatsConfig) -> Self {
        Self::default().with_pagerank(PageRank::new(PageRankParams {
            damping: config.effective_damping(),
            max_iterations: config.effective_max_iterations(),
            tolerance: config.effective_tolerance(),
        }))
    }

    pub fn with_betweenness(mut self, centrality: impl Centrality + 'static) -> Self {
        self.betweenness = Box::new(centrality);
        self
    }

    pub fn with_pagerank(mut self, centrality: impl Centrality + 'static) -> Self {
        self.pagerank = Box::new(centrality);
        self
    }

    /// Compute the statistics table for `graph`.
    ///
    /// Characters with total degree 0 are left out. Rows are sorted
    /// descending by unweighted betweenness; ties keep node insertion order.
    pub fn compute(&self, graph: &SpeechGraph) -> StatsTable {
        let degrees = degree_counts(graph);
        let betweenness = self.betweenness.compute(graph, false);
        let betweenness_weighted = self.betweenness.compute(graph, true);
        let pagerank = self.pagerank.compute(graph, false);
        let pagerank_weighted = self.pagerank.compute(graph, true);

        let mut rows: Vec<StatsRow> = graph
            .graph
            .node_indices()
            .filter_map(|idx| {
                let i = idx.index();
                let degree = degrees.get(i).copied().unwrap_or_default();
                if degree.degree() == 0 {
                    return None;
                }
                Some(StatsRow {
                    character: graph.character(idx).to_string(),
                    stats: NodeStats {
                        degree: degree.degree(),
                        indegree: degree.indegree,
                        weighted_indegree: degree.weighted_indegree,
                        outdegree: degree.outdegree,
                        weighted_outdegree: degree.weighted_outdegree,
                        betweenness: score(&betweenness, i),
                        betweenness_weighted: score(&betweenness_weighted, i),
                        pagerank: score(&pagerank, i),
                        pagerank_weighted: score(&pagerank_weighted, i),
                    },
                })
            })
            .collect();

        // Stable sort: equal betweenness keeps insertion order.
        rows.sort_by(|a, b| b.stats.betweenness.total_cmp(&a.stats.betweenness));

        debug!(
            rows = rows.len(),
            betweenness = self.betweenness.name(),
            pagerank = self.pagerank.name(),
            "computed network stats"
        );
        StatsTable::from_sorted_rows(rows)
    }
}

/// Score at `i`, defaulting missing or non-finite values to 0.
fn score(scores: &[f64], i: usize) -> f64 {
    match scores.get(i) {
        Some(v) if v.is_finite() => *v,
        _ => 0.0,
    }
}

/// Compute the statistics table with the default engine.
pub fn compute_stats(graph: &SpeechGraph) -> StatsTable {
    StatsEngine::default().compute(graph)
}
